//! Static mapping from version identifiers to term tables.
//!
//! Every version resolves to up to three tables: the umbrella table of its language,
//! its own table, and optionally the umbrella table of its translation family. Terms
//! shared by many versions are stored once in an umbrella table instead of in every
//! version table.
//!
//! Table bindings are fixed for the lifetime of the process.

use std::{collections::HashMap, fmt, sync::LazyLock};

/// Index of a term table within the table set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableId(u8);

impl TableId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Name under which the table is loaded: an umbrella name such as `"KJV-like"`,
    /// or a version name.
    pub fn name(self) -> &'static str {
        let index = self.index();
        if index < UMBRELLA_COUNT {
            UMBRELLAS[index].name
        } else {
            VERSIONS[index - UMBRELLA_COUNT].name
        }
    }

    /// All table ids in index order.
    pub fn all() -> impl Iterator<Item = TableId> {
        (0..TABLE_COUNT as u8).map(TableId)
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

pub const ALL_ENG: TableId = TableId(0);
pub const ALL_ES: TableId = TableId(1);
pub const KJV_LIKE: TableId = TableId(2);
pub const NIV: TableId = TableId(3);
pub const LITERAL: TableId = TableId(4);
pub const LITERAL2: TableId = TableId(5);
pub const DYNAMIC: TableId = TableId(6);
pub const ES_RV: TableId = TableId(7);
pub const EXTRA_ENG: TableId = TableId(8);

const UMBRELLA_COUNT: usize = 9;
const VERSION_COUNT: usize = 31;

/// Total number of tables: umbrellas followed by one table per version.
pub const TABLE_COUNT: usize = UMBRELLA_COUNT + VERSION_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    pub const fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
        }
    }

    /// The umbrella table holding terms shared across the language.
    pub const fn umbrella(self) -> TableId {
        match self {
            Language::English => ALL_ENG,
            Language::Spanish => ALL_ES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UmbrellaKind {
    Language(Language),
    Family,
}

/// A table shared by several versions.
#[derive(Debug)]
pub struct UmbrellaInfo {
    pub name: &'static str,
    pub table: TableId,
    pub kind: UmbrellaKind,
}

/// A concrete Bible version.
#[derive(Debug)]
pub struct VersionInfo {
    pub name: &'static str,
    pub language: Language,
    pub table: TableId,
    pub family: Option<TableId>,
}

impl VersionInfo {
    pub fn slots(&self) -> VersionSlots {
        VersionSlots {
            umbrella: self.language.umbrella(),
            version: self.table,
            family: self.family,
        }
    }
}

/// The tables consulted when searching one version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSlots {
    pub umbrella: TableId,
    pub version: TableId,
    pub family: Option<TableId>,
}

impl VersionSlots {
    /// Umbrella, version and family tables, in that order.
    pub fn tables(&self) -> impl Iterator<Item = TableId> + use<> {
        [Some(self.umbrella), Some(self.version), self.family]
            .into_iter()
            .flatten()
    }
}

pub static UMBRELLAS: [UmbrellaInfo; UMBRELLA_COUNT] = [
    umbrella("AllEng", ALL_ENG, UmbrellaKind::Language(Language::English)),
    umbrella("AllEs", ALL_ES, UmbrellaKind::Language(Language::Spanish)),
    umbrella("KJV-like", KJV_LIKE, UmbrellaKind::Family),
    umbrella("NIV", NIV, UmbrellaKind::Family),
    umbrella("Literal", LITERAL, UmbrellaKind::Family),
    umbrella("Literal2", LITERAL2, UmbrellaKind::Family),
    umbrella("Dynamic", DYNAMIC, UmbrellaKind::Family),
    umbrella("EsRV", ES_RV, UmbrellaKind::Family),
    umbrella("ExtraEng", EXTRA_ENG, UmbrellaKind::Family),
];

use Language::{English, Spanish};

const VERSION_TABLE: [VersionInfo; VERSION_COUNT] = [
    version("ACV", English, 9, Some(LITERAL)),
    version("AKJV", English, 10, Some(KJV_LIKE)),
    version("AMP", English, 11, Some(LITERAL)),
    version("ASV", English, 12, Some(LITERAL)),
    version("BBE", English, 13, None),
    version("BSB", English, 14, Some(LITERAL2)),
    version("CSB", English, 15, Some(DYNAMIC)),
    version("Darby", English, 16, Some(EXTRA_ENG)),
    version("DRA", English, 17, None),
    version("EBR", English, 18, Some(EXTRA_ENG)),
    version("ESV", English, 19, Some(LITERAL)),
    version("GNV", English, 20, Some(KJV_LIKE)),
    version("KJV", English, 21, Some(KJV_LIKE)),
    version("KJV 1611", English, 22, Some(KJV_LIKE)),
    version("LSV", English, 23, Some(LITERAL2)),
    version("MSG", English, 24, None),
    version("NASB 1995", English, 25, Some(LITERAL)),
    version("NET", English, 26, Some(DYNAMIC)),
    version("NIV 1984", English, 27, Some(NIV)),
    version("NIV 2011", English, 28, Some(NIV)),
    version("NKJV", English, 29, Some(LITERAL)),
    version("NLT", English, 30, Some(DYNAMIC)),
    version("RNKJV", English, 31, Some(KJV_LIKE)),
    version("RSV", English, 32, Some(LITERAL)),
    version("RWV", English, 33, Some(LITERAL)),
    version("UKJV", English, 34, Some(KJV_LIKE)),
    version("WEB", English, 35, Some(LITERAL)),
    version("YLT", English, 36, Some(LITERAL2)),
    version("BTX3", Spanish, 37, None),
    version("RV1960", Spanish, 38, Some(ES_RV)),
    version("RV2004", Spanish, 39, Some(ES_RV)),
];

pub static VERSIONS: [VersionInfo; VERSION_COUNT] = VERSION_TABLE;

/// Version identifiers in registry order.
pub static VERSION_NAMES: [&str; VERSION_COUNT] = {
    let mut names = [""; VERSION_COUNT];
    let mut i = 0;
    while i < VERSION_COUNT {
        names[i] = VERSION_TABLE[i].name;
        i += 1;
    }
    names
};

const fn umbrella(name: &'static str, table: TableId, kind: UmbrellaKind) -> UmbrellaInfo {
    UmbrellaInfo { name, table, kind }
}

const fn version(
    name: &'static str,
    language: Language,
    table: u8,
    family: Option<TableId>,
) -> VersionInfo {
    VersionInfo {
        name,
        language,
        table: TableId(table),
        family,
    }
}

static TABLES_BY_NAME: LazyLock<HashMap<&'static str, TableId>> = LazyLock::new(|| {
    UMBRELLAS
        .iter()
        .map(|u| (u.name, u.table))
        .chain(VERSIONS.iter().map(|v| (v.name, v.table)))
        .collect()
});

/// Looks up a concrete version (umbrella names are not versions).
pub fn version_info(name: &str) -> Option<&'static VersionInfo> {
    let table = *TABLES_BY_NAME.get(name)?;
    table
        .index()
        .checked_sub(UMBRELLA_COUNT)
        .map(|index| &VERSIONS[index])
}

/// Looks up an umbrella table by name.
pub fn umbrella_info(name: &str) -> Option<&'static UmbrellaInfo> {
    let table = *TABLES_BY_NAME.get(name)?;
    UMBRELLAS.get(table.index())
}

/// Tables to consult when searching `version`, or `None` for an unknown identifier.
pub fn lookup(version: &str) -> Option<VersionSlots> {
    version_info(version).map(VersionInfo::slots)
}

/// Resolves a version or umbrella name to the table it is loaded into.
pub fn resolve_table(name: &str) -> Option<TableId> {
    TABLES_BY_NAME.get(name).copied()
}

pub fn versions() -> &'static [&'static str] {
    &VERSION_NAMES
}

pub fn versions_in(language: Language) -> impl Iterator<Item = &'static str> {
    VERSIONS
        .iter()
        .filter(move |v| v.language == language)
        .map(|v| v.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ids_are_dense() {
        for (i, u) in UMBRELLAS.iter().enumerate() {
            assert_eq!(u.table.index(), i, "{}", u.name);
        }
        for (i, v) in VERSIONS.iter().enumerate() {
            assert_eq!(v.table.index(), UMBRELLAS.len() + i, "{}", v.name);
        }
        assert_eq!(TABLE_COUNT, 40);
        assert_eq!(TableId::all().count(), TABLE_COUNT);
        assert_eq!(TABLES_BY_NAME.len(), TABLE_COUNT);
    }

    #[test]
    fn test_lookup() {
        let kjv = lookup("KJV").unwrap();
        assert_eq!(kjv.umbrella, ALL_ENG);
        assert_eq!(kjv.family, Some(KJV_LIKE));
        assert_eq!(kjv.version.name(), "KJV");
        assert_eq!(
            kjv.tables().map(TableId::name).collect::<Vec<_>>(),
            ["AllEng", "KJV", "KJV-like"]
        );

        let bbe = lookup("BBE").unwrap();
        assert_eq!(bbe.family, None);
        assert_eq!(bbe.tables().count(), 2);

        let rv = lookup("RV1960").unwrap();
        assert_eq!(rv.umbrella, ALL_ES);
        assert_eq!(rv.family, Some(ES_RV));

        assert!(lookup("NotAVersion").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("kjv").is_none());
        // Umbrellas are tables, not searchable versions.
        assert!(lookup("AllEng").is_none());
        assert!(lookup("NIV").is_none());
    }

    #[test]
    fn test_resolve_table() {
        assert_eq!(resolve_table("AllEng"), Some(ALL_ENG));
        assert_eq!(resolve_table("KJV-like"), Some(KJV_LIKE));
        assert_eq!(resolve_table("NIV 2011").map(TableId::name), Some("NIV 2011"));
        assert_eq!(resolve_table("Unknown"), None);
        assert_eq!(umbrella_info("EsRV").unwrap().kind, UmbrellaKind::Family);
        assert!(umbrella_info("KJV").is_none());
        assert!(version_info("KJV-like").is_none());
    }

    #[test]
    fn test_version_lists() {
        assert_eq!(versions().len(), 31);
        assert_eq!(versions()[0], "ACV");
        assert!(versions().iter().zip(VERSIONS.iter()).all(|(n, v)| *n == v.name));
        assert_eq!(versions_in(English).count(), 28);
        assert_eq!(versions_in(Spanish).collect::<Vec<_>>(), ["BTX3", "RV1960", "RV2004"]);
    }

    #[test]
    fn test_family_membership() {
        let members = |family: TableId| {
            VERSIONS
                .iter()
                .filter(|v| v.family == Some(family))
                .map(|v| v.name)
                .collect::<Vec<_>>()
        };
        assert_eq!(members(KJV_LIKE), ["AKJV", "GNV", "KJV", "KJV 1611", "RNKJV", "UKJV"]);
        assert_eq!(members(NIV), ["NIV 1984", "NIV 2011"]);
        assert_eq!(members(LITERAL2), ["BSB", "LSV", "YLT"]);
        assert_eq!(members(DYNAMIC), ["CSB", "NET", "NLT"]);
        assert_eq!(members(EXTRA_ENG), ["Darby", "EBR"]);
        assert_eq!(members(LITERAL).len(), 9);
        // Family umbrellas never mix languages.
        for v in &VERSIONS {
            if v.family == Some(ES_RV) {
                assert_eq!(v.language, Spanish);
            }
        }
    }
}
