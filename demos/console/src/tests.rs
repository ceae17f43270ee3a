//! Tests for the console: grammar, configuration layering, and end-to-end
//! sessions rendered into a buffer.

#[cfg(test)]
mod grammar {
    use hm_core::{Coord, LicenseNumber, LocalityId, Specialty};

    use crate::command::{parse, tokenize, Command, ParseError};

    #[test]
    fn tokenize_quotes() {
        assert_eq!(
            tokenize(r#"locality "Vila Nova" yes"#).unwrap(),
            ["locality", "Vila Nova", "yes"]
        );
        assert_eq!(tokenize("  a   b ").unwrap(), ["a", "b"]);
        assert_eq!(tokenize(r#"x """#).unwrap(), ["x", ""]);
        assert_eq!(tokenize(r#"x "open"#), Err(ParseError::UnterminatedQuote));
    }

    #[test]
    fn blank_and_comment_lines() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   "), Ok(None));
        assert_eq!(parse("# setup"), Ok(None));
    }

    #[test]
    fn locality_and_road() {
        assert_eq!(
            parse(r#"locality "Santa Casa" sim"#),
            Ok(Some(Command::AddLocality { name: "Santa Casa".into(), has_hospital: true }))
        );
        assert_eq!(
            parse("ROAD 1 2"),
            Ok(Some(Command::AddRoad { from: LocalityId(1), to: LocalityId(2) }))
        );
        assert!(matches!(parse("locality X maybe"), Err(ParseError::InvalidValue { .. })));
        assert!(matches!(parse("road 1"), Err(ParseError::Usage(_))));
        assert!(matches!(parse("road -1 2"), Err(ParseError::InvalidValue { .. })));
    }

    #[test]
    fn professional_by_label_or_number() {
        let expected = Command::RegisterProfessional {
            name:      "Ana Souza".into(),
            specialty: Specialty::ClinicoGeral,
            license:   LicenseNumber(100),
            position:  Coord::new(-3, 4),
        };
        assert_eq!(
            parse(r#"professional "Ana Souza" "Clinico Geral" 100 -3 4"#),
            Ok(Some(expected.clone()))
        );
        assert_eq!(parse(r#"professional "Ana Souza" 1 100 -3 4"#), Ok(Some(expected)));
        assert!(matches!(
            parse("professional Ana Oncologia 1 0 0"),
            Err(ParseError::Specialty(_))
        ));
    }

    #[test]
    fn nearby_optional_radius() {
        assert_eq!(
            parse("nearby 1 2"),
            Ok(Some(Command::Nearby { center: Coord::new(1, 2), radius: None }))
        );
        assert_eq!(
            parse("nearby 1 2 50.5"),
            Ok(Some(Command::Nearby { center: Coord::new(1, 2), radius: Some(50.5) }))
        );
        assert!(parse("nearby 1 2 -1").is_err());
    }

    #[test]
    fn unknown_command() {
        assert_eq!(parse("fly 1"), Err(ParseError::UnknownCommand("fly".into())));
    }
}

#[cfg(test)]
mod configuration {
    use std::io::Write;

    use crate::config::{resolve, Overrides};

    #[test]
    fn defaults_without_file() {
        let cfg = resolve(None, Overrides::default()).unwrap();
        assert_eq!(cfg.max_localities, 999);
        assert_eq!(cfg.nearby_radius, 100.0);
    }

    #[test]
    fn file_then_flags() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{ "max_localities": 5 }}"#).unwrap();

        let cfg = resolve(Some(f.path()), Overrides::default()).unwrap();
        assert_eq!(cfg.max_localities, 5);
        assert_eq!(cfg.nearby_radius, 100.0);

        let cfg = resolve(
            Some(f.path()),
            Overrides { max_localities: Some(7), nearby_radius: Some(25.0) },
        )
        .unwrap();
        assert_eq!(cfg.max_localities, 7);
        assert_eq!(cfg.nearby_radius, 25.0);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(resolve(None, Overrides { max_localities: Some(0), nearby_radius: None }).is_err());

        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "not json").unwrap();
        assert!(resolve(Some(f.path()), Overrides::default()).is_err());
    }
}

#[cfg(test)]
mod sessions {
    use hm_core::RegistryConfig;
    use hm_registry::Registry;

    use crate::session::run;

    fn transcript(script: &str) -> String {
        let mut reg = Registry::new(RegistryConfig::default()).unwrap();
        let mut out = Vec::new();
        run(&mut reg, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn hospital_search() {
        let out = transcript(
            "locality A no\n\
             locality B yes\n\
             road 1 2\n\
             hospital 1\n\
             hospital 2\n\
             hospital 3\n",
        );
        assert!(out.contains("Locality A registered with ID: 1"));
        assert!(out.contains("Locality B registered with ID: 2"));
        assert!(out.contains("Road registered from A to B!"));
        assert!(out.contains("Locality: B (ID: 2)\nHops: 1  Path: 1 -> 2"));
        assert!(out.contains("Hops: 0  Path: 2"));
        assert!(out.contains("Error: locality #3 does not exist"));
    }

    #[test]
    fn no_hospital_message() {
        let out = transcript("locality A no\nhospital 1\n");
        assert!(out.contains("No hospital reachable from this locality."));
    }

    #[test]
    fn duplicate_name_keeps_going() {
        let out = transcript(
            "professional Ana Cardiologia 100 0 0\n\
             professional Ana Pediatria 200 5 5\n\
             professional Bia Pediatria 100 5 5\n\
             professional Bia Pediatria 200 5 5\n\
             by-name\n",
        );
        assert!(out.contains("Error: a professional named \"Ana\" is already registered"));
        assert!(out.contains("Error: CRM 100 is already registered"));
        assert!(out.contains("Professional Bia registered successfully!"));
        assert!(out.contains("| Name: Ana\n| Specialty: Cardiologia\n| CRM: 100\n| Coordinates: (0, 0)"));
    }

    #[test]
    fn nearby_listing() {
        let out = transcript(
            "professional Perto Neurologia 1 0 0\n\
             professional Longe Neurologia 2 150 0\n\
             nearby 0 0\n",
        );
        assert!(out.contains("- Perto [Neurologia] Distance: 0.00 units"));
        assert!(!out.contains("Longe ["));
        assert!(out.contains("Total: 1 professionals found."));
    }

    #[test]
    fn quit_stops_reading() {
        let out = transcript("quit\nlocality A no\n");
        assert!(!out.contains("registered"));
    }

    #[test]
    fn parse_errors_are_reported() {
        let out = transcript("road x y\nbogus\n");
        assert!(out.contains("Error: invalid locality id: \"x\""));
        assert!(out.contains("Error: unknown command \"bogus\""));
    }
}
