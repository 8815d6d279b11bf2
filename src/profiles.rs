/// Profile catalog: article code and the profile name shown to the operator.
pub const PROFILES: &[(&str, &str)] = &[
    ("PRG070WCE001", "VS1N"),
    ("PRG080WCE001", "VS1"),
    ("PRG080WCE002", "VS3"),
    ("PRGXXXWCE001", "S12N"),
    ("PRG020WWA001", "VF3"),
    ("PRG070WWA001", "VF4"),
    ("PRG070WWA002", "SW3"),
    ("PRG080WWA001", "C21"),
    ("PRG080WWA002", "SW2"),
    ("PRGXXXWWA001", "SW5"),
    ("PRGXXXWWA005", "C3"),
    ("PRG070WCO001", "V19"),
    ("PRG070WCO002", "V21"),
    ("PRG070WCO003", "V28"),
    ("PRG070WCO004", "V18"),
    ("PRG070WCO005", "V11G"),
    ("PRG070WCO006", "V20"),
    ("PRG080WCO001", "V1"),
    ("PRG080WCO002", "V8"),
    ("PRGXXXWCO003", "V30"),
    ("PRG070WTR001", "S17"),
    ("PRG070WGA001", "S18"),
    ("PRG070WGA002", "S19"),
    ("PRG080WGA001", "S13"),
    ("PRGXXXWGA007", "V32"),
    ("PRGXXXWGA008", "V33"),
    ("PRGXXXWGA013", "S14"),
    ("PRGXXXWGA014", "S15N"),
    ("PRGXXXWRP002", "S09"),
    ("PRD080DAP100", "RP"),
    ("PRK070DAP100", "RPW"),
    ("PRS100WWA001", "S100B"),
    ("PRD100DAP100", "S100C"),
    ("PRSXXXWWA001", "S70B"),
];

pub fn lookup(article_code: &str) -> Option<&'static str> {
    PROFILES
        .iter()
        .find(|&&(code, _)| code == article_code)
        .map(|&(_, name)| name)
}

pub fn is_known(name: &str) -> bool {
    PROFILES.iter().any(|&(_, n)| n == name)
}

/// Resolves either an article code or a profile name to the profile name.
pub fn resolve(key: &str) -> Option<&'static str> {
    lookup(key).or_else(|| {
        PROFILES
            .iter()
            .find(|&&(_, name)| name == key)
            .map(|&(_, name)| name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(PROFILES.len(), 34);
        assert_eq!(PROFILES.first(), Some(&("PRG070WCE001", "VS1N")));
        assert_eq!(PROFILES.last(), Some(&("PRSXXXWWA001", "S70B")));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("PRG080WCE001"), Some("VS1"));
        assert_eq!(lookup("PRK070DAP100"), Some("RPW"));
        assert_eq!(lookup("NOPE"), None);
    }

    #[test]
    fn test_resolve_code_or_name() {
        assert_eq!(resolve("PRG080WCE001"), Some("VS1"));
        assert_eq!(resolve("VS1"), Some("VS1"));
        assert_eq!(resolve("vs1"), None);
        assert_eq!(resolve("PRG000XXX000"), None);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = PROFILES.iter().map(|&(_, name)| name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PROFILES.len());
        assert!(is_known("V11G"));
        assert!(!is_known("Select Profile"));
    }
}
