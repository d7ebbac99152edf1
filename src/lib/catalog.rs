use crate::geo::Coordinate;

/// A single movie theater. The catalog is compiled into the application and
/// never mutated.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TheaterRecord {
    pub name: &'static str,
    /// The chain the theater belongs to. Doubles as the filter category.
    pub chain: &'static str,
    pub coordinate: Coordinate,
}

const THEATERS: &[TheaterRecord] = &[
    TheaterRecord {
        name: "CGV Yeongdeungpo",
        chain: "CGV",
        coordinate: Coordinate::new(37.517169, 126.903341),
    },
    TheaterRecord {
        name: "CGV Mullae",
        chain: "CGV",
        coordinate: Coordinate::new(37.515861, 126.889069),
    },
    TheaterRecord {
        name: "Megabox Mokdong",
        chain: "Megabox",
        coordinate: Coordinate::new(37.526210, 126.864994),
    },
    TheaterRecord {
        name: "Megabox Sinchon",
        chain: "Megabox",
        coordinate: Coordinate::new(37.555934, 126.936893),
    },
    TheaterRecord {
        name: "Lotte Cinema Yeongdeungpo",
        chain: "Lotte Cinema",
        coordinate: Coordinate::new(37.516266, 126.907088),
    },
    TheaterRecord {
        name: "Lotte Cinema Hapjeong",
        chain: "Lotte Cinema",
        coordinate: Coordinate::new(37.551877, 126.912827),
    },
];

/// Read-only provider of the theater list and the derived chain names.
pub struct TheaterCatalog {
    records: &'static [TheaterRecord],
}

impl TheaterCatalog {
    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self::with_records(THEATERS)
    }

    /// A catalog over a caller-provided table.
    pub fn with_records(records: &'static [TheaterRecord]) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TheaterRecord] {
        self.records
    }

    /// The distinct chain names, in first-appearance order. Feeds the filter
    /// menu.
    pub fn chains(&self) -> Vec<&'static str> {
        let mut chains = Vec::new();
        for record in self.records {
            if !chains.contains(&record.chain) {
                chains.push(record.chain);
            }
        }
        chains
    }

    /// All records belonging to `chain`.
    pub fn matching<'a>(&'a self, chain: &'a str) -> impl Iterator<Item = &'a TheaterRecord> + 'a {
        self.records.iter().filter(move |record| record.chain == chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chains_are_distinct_and_keep_first_appearance_order() {
        let catalog = TheaterCatalog::builtin();
        assert_eq!(catalog.chains(), vec!["CGV", "Megabox", "Lotte Cinema"]);
    }

    #[test]
    fn matching_returns_only_the_requested_chain() {
        let catalog = TheaterCatalog::builtin();
        let matches: Vec<_> = catalog.matching("Megabox").collect();

        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|record| record.chain == "Megabox"));
    }

    #[test]
    fn matching_an_unknown_chain_is_empty() {
        let catalog = TheaterCatalog::builtin();
        assert_eq!(catalog.matching("IMAX").count(), 0);
    }
}
