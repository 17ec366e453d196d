//! # 代码查找表
//!
//! 国家、能源商品、技术类型、能源层级四张静态查找表。
//!
//! ## 依赖关系
//! - 被 `codes/decoder.rs` 调用
//! - 纯静态数据，无外部依赖

use std::collections::HashMap;
use std::sync::LazyLock;

/// 国家代码（2 位）
pub static COUNTRY_CODES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("AT", "Austria"),
        ("BE", "Belgium"),
        ("BG", "Bulgaria"),
        ("CH", "Switzerland"),
        ("CY", "Cyprus"),
        ("CZ", "Czech Republic"),
        ("DE", "Germany"),
        ("DK", "Denmark"),
        ("EE", "Estonia"),
        ("ES", "Spain"),
        ("FI", "Finland"),
        ("FR", "France"),
        ("GR", "Greece"),
        ("HR", "Croatia"),
        ("HU", "Hungary"),
        ("IE", "Ireland"),
        ("IT", "Italy"),
        ("LT", "Lithuania"),
        ("LU", "Luxembourg"),
        ("LV", "Latvia"),
        ("MT", "Malta"),
        ("NL", "the Netherlands"),
        ("NO", "Norway"),
        ("PL", "Poland"),
        ("PT", "Portugal"),
        ("RO", "Romania"),
        ("SE", "Sweden"),
        ("SI", "Slovenia"),
        ("SK", "Slovakia"),
        ("UK", "United Kingdom"),
    ])
});

/// 能源商品代码（2 位）
pub static COMMODITY_CODES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("BF", "Biofuel"),
        ("BM", "Biomass"),
        ("CO", "Coal"),
        ("EL", "Electricity"),
        ("E1", "Electricity 1"),
        ("E2", "Electricity 2"),
        ("GO", "Geothermal"),
        ("HF", "Heavy fuel oil"),
        ("HY", "Hydro"),
        ("NG", "Natural gas"),
        ("NU", "Nuclear"),
        ("OC", "Ocean"),
        ("OI", "Oil"),
        ("OS", "Oil Shale"),
        ("SO", "Sun"),
        ("UR", "Uranium"),
        ("WS", "Waste"),
        ("WI", "Wind"),
    ])
});

/// 技术类型代码（2 位）
pub static TECHNOLOGY_CODES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("CC", "Combined cycle"),
            ("CH", "Combined heat and power"),
            ("CS", "Carbon Capture and Storage"),
            ("CV", "Conventional"),
            ("DI", "Distributed PV"),
            ("DM", "Dam"),
            ("DS", "Pumped Storage"),
            ("FC", "Fuel cell"),
            ("GC", "Gas cycle"),
            ("G2", "Generation 2"),
            ("G3", "Generation 3"),
            ("HP", "Internal combustion engine with heat recovery"),
            ("OF", "Offshore"),
            ("ON", "Onshore"),
            ("ST", "Steam cycle"),
            ("UT", "Utility PV"),
            ("WV", "Wave power"),
        ])
    });

/// 能源层级代码（1 位）
pub static ENERGY_LEVEL_CODES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("P", "Primary energy commodity"),
            ("F", "Final electricity"),
            ("I", "Import technology"),
            ("X", "Extraction or generation technology"),
        ])
    });

/// 查找国家名称
pub fn lookup_country(code: &str) -> Option<&'static str> {
    COUNTRY_CODES.get(code).copied()
}

/// 查找能源商品名称
pub fn lookup_commodity(code: &str) -> Option<&'static str> {
    COMMODITY_CODES.get(code).copied()
}

/// 查找技术类型名称
pub fn lookup_technology(code: &str) -> Option<&'static str> {
    TECHNOLOGY_CODES.get(code).copied()
}

/// 查找能源层级名称
pub fn lookup_energy_level(code: &str) -> Option<&'static str> {
    ENERGY_LEVEL_CODES.get(code).copied()
}
