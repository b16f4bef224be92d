use veil::generators::{identifier_names_generator, is_valid_identifier_name, IdentifierNamesGenerator};
use veil::options::{IdentifierNamesGeneratorKind, ObfuscatorOptions, OptionsError};
use veil::random::RandomGenerator;

#[test]
fn test_strategy_tags_round_trip() {
    let kinds = [
        IdentifierNamesGeneratorKind::Dictionary,
        IdentifierNamesGeneratorKind::Hexadecimal,
        IdentifierNamesGeneratorKind::Mangled,
        IdentifierNamesGeneratorKind::MangledShuffled,
        IdentifierNamesGeneratorKind::Incremental,
    ];

    for kind in kinds {
        let parsed: IdentifierNamesGeneratorKind = kind.as_str().parse().unwrap();
        assert_eq!(parsed, kind);
    }

    assert_eq!(
        "mangled-shuffled".parse::<IdentifierNamesGeneratorKind>().unwrap(),
        IdentifierNamesGeneratorKind::MangledShuffled
    );
}

#[test]
fn test_unknown_strategy_tag_is_rejected() {
    let err = "base64".parse::<IdentifierNamesGeneratorKind>().unwrap_err();
    assert!(
        matches!(err, OptionsError::UnknownGenerator { ref tag } if tag == "base64"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_dictionary_strategy_requires_words() {
    let options = ObfuscatorOptions {
        identifier_names_generator: IdentifierNamesGeneratorKind::Dictionary,
        identifiers_dictionary: Vec::new(),
        ..ObfuscatorOptions::default()
    };

    let mut random = RandomGenerator::new(Some(0));
    let err = identifier_names_generator(&options, &mut random).unwrap_err();
    assert!(matches!(err, OptionsError::MissingDictionary), "unexpected error: {err}");
}

#[test]
fn test_dictionary_words_must_be_valid_identifiers() {
    for bad in ["1digit", "has-dash", "class", ""] {
        let options = ObfuscatorOptions {
            identifier_names_generator: IdentifierNamesGeneratorKind::Dictionary,
            identifiers_dictionary: vec!["fine".to_string(), bad.to_string()],
            ..ObfuscatorOptions::default()
        };

        let mut random = RandomGenerator::new(Some(0));
        let err = identifier_names_generator(&options, &mut random).unwrap_err();
        assert!(
            matches!(err, OptionsError::InvalidDictionaryWord { ref word } if word == bad),
            "{bad:?} should be rejected, got: {err}"
        );
    }
}

#[test]
fn test_valid_configuration_constructs() {
    let options = ObfuscatorOptions {
        identifiers_prefix: "_".to_string(),
        identifier_names_generator: IdentifierNamesGeneratorKind::Dictionary,
        identifiers_dictionary: vec!["north".to_string(), "south".to_string()],
        seed: Some(99),
    };

    let mut random = RandomGenerator::new(options.seed);
    let mut names = identifier_names_generator(&options, &mut random).expect("valid configuration");
    assert_eq!(names.generate_next(None), "north");
}

#[test]
fn test_identifier_validity_rules() {
    assert!(is_valid_identifier_name("x"));
    assert!(is_valid_identifier_name("_private"));
    assert!(is_valid_identifier_name("$jq"));
    assert!(is_valid_identifier_name("camelCase9"));

    assert!(!is_valid_identifier_name(""));
    assert!(!is_valid_identifier_name("9lives"));
    assert!(!is_valid_identifier_name("kebab-case"));
    assert!(!is_valid_identifier_name("with space"));
    assert!(!is_valid_identifier_name("return"));
}
