use email_reply_parser::*;

const FIXTURES: &[(&str, &str)] = &[
    ("email_1_1", include_str!("fixtures/email_1_1.txt")),
    ("email_1_2", include_str!("fixtures/email_1_2.txt")),
    ("email_1_3", include_str!("fixtures/email_1_3.txt")),
    ("email_1_6", include_str!("fixtures/email_1_6.txt")),
    ("email_1_7", include_str!("fixtures/email_1_7.txt")),
    ("email_1_8", include_str!("fixtures/email_1_8.txt")),
    ("email_1_9", include_str!("fixtures/email_1_9.txt")),
    ("email_1_10", include_str!("fixtures/email_1_10.txt")),
    ("correct_sig", include_str!("fixtures/correct_sig.txt")),
    ("email_accents", include_str!("fixtures/email_accents.txt")),
    ("email_bullets", include_str!("fixtures/email_bullets.txt")),
    ("email_chinese", include_str!("fixtures/email_chinese.txt")),
    ("email_em_dash", include_str!("fixtures/email_em_dash.txt")),
    ("email_french", include_str!("fixtures/email_french.txt")),
    ("email_german", include_str!("fixtures/email_german.txt")),
    ("email_hotmail", include_str!("fixtures/email_hotmail.txt")),
    ("email_iPhone2", include_str!("fixtures/email_iPhone2.txt")),
    ("email_spanish", include_str!("fixtures/email_spanish.txt")),
    (
        "spaces_before_reply_header",
        include_str!("fixtures/spaces_before_reply_header.txt"),
    ),
];

/// Line-by-line comparison form: trailing whitespace on a line is not
/// preserved for non-signature lines.
fn squash(text: &str) -> String {
    text.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_fragments_partition_the_body() {
    for (name, body) in FIXTURES {
        let email = read(body);
        let joined = email
            .iter()
            .map(Fragment::content)
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!(
            squash(&joined),
            squash(normalize(body).trim()),
            "fragments of {name} do not cover the body"
        );
    }
}

#[test]
fn test_hidden_fragments_form_a_suffix() {
    for (name, body) in FIXTURES {
        let hidden: Vec<bool> = read(body).iter().map(Fragment::hidden).collect();

        assert!(
            hidden.windows(2).all(|pair| !pair[0] || pair[1]),
            "visible fragment below a hidden one in {name}: {hidden:?}"
        );
    }
}

#[test]
fn test_every_body_has_a_fragment() {
    for (name, body) in FIXTURES {
        assert!(!read(body).is_empty(), "{name} produced no fragments");
    }
}

#[test]
fn test_read_is_deterministic() {
    for (_, body) in FIXTURES {
        assert_eq!(read(body), read(body));
    }
}

#[test]
fn test_input_is_left_untouched() {
    for (_, body) in FIXTURES {
        let owned = (*body).to_string();
        let _ = read(&owned);

        assert_eq!(owned, *body);
    }
}

#[test]
fn test_visible_text_is_subset_with_signatures() {
    for (name, body) in FIXTURES {
        let email = read(body);
        let without = email.visible_text(false);
        let with = email.visible_text(true);

        assert!(with.len() >= without.len(), "{name}");
    }
}

#[test]
fn test_empty_body() {
    for body in ["", "   ", "\n\n", "\r\n\t\r\n "] {
        let email = read(body);

        assert_eq!(email.len(), 1);
        assert_eq!(email.fragments()[0].content(), "");
        assert!(email.fragments()[0].hidden());
        assert_eq!(email.visible_text(false), "");
        assert_eq!(parse_reply(body, true), "");
    }
}

#[test]
fn test_pathological_body_completes() {
    let mut body = "On a line\n".repeat(2000);
    body.push_str(&"x".repeat(5000));

    let email = read(&body);
    assert_eq!(email.len(), 1);
    assert!(email.visible_text(false).starts_with("On a line"));
}

#[test]
fn test_unterminated_reply_header_completes() {
    let body = format!("Hi\n\nOn {}", "a ".repeat(50_000));

    let email = read(&body);
    assert!(!email.is_empty());
    assert!(parse_reply(&body, false).starts_with("Hi"));
}
