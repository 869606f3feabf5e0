use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared::nav::NavError;

/// Icons of navigation entries.
///
/// The core only carries the identifier; rendering lives in the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    ChartPie,
    ChartLine,
    Shield,
    Map,
    MapPin,
    User,
    Users,
    Car,
    CarSimple,
    Driver,
    UserFocus,
    GearSix,
    XSquare,
    DrawPolygon,
    UserCircle,
}

impl NavIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavIcon::ChartPie => "chart-pie",
            NavIcon::ChartLine => "chart-line",
            NavIcon::Shield => "shield",
            NavIcon::Map => "map",
            NavIcon::MapPin => "map-pin",
            NavIcon::User => "user",
            NavIcon::Users => "users",
            NavIcon::Car => "car",
            NavIcon::CarSimple => "car-simple",
            NavIcon::Driver => "driver",
            NavIcon::UserFocus => "user-focus",
            NavIcon::GearSix => "gear-six",
            NavIcon::XSquare => "x-square",
            NavIcon::DrawPolygon => "draw-polygon",
            NavIcon::UserCircle => "user-circle",
        }
    }

    pub fn all() -> Vec<NavIcon> {
        vec![
            NavIcon::ChartPie,
            NavIcon::ChartLine,
            NavIcon::Shield,
            NavIcon::Map,
            NavIcon::MapPin,
            NavIcon::User,
            NavIcon::Users,
            NavIcon::Car,
            NavIcon::CarSimple,
            NavIcon::Driver,
            NavIcon::UserFocus,
            NavIcon::GearSix,
            NavIcon::XSquare,
            NavIcon::DrawPolygon,
            NavIcon::UserCircle,
        ]
    }
}

impl FromStr for NavIcon {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavIcon::all()
            .into_iter()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| NavError::UnknownIcon(s.to_string()))
    }
}

impl std::fmt::Display for NavIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_unique() {
        let all = NavIcon::all();
        let mut names: Vec<&str> = all.iter().map(|i| i.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_from_str_matches_serde_name() {
        for icon in NavIcon::all() {
            let json = serde_json::to_string(&icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.as_str()));
            assert_eq!(icon.as_str().parse::<NavIcon>().unwrap(), icon);
        }
    }

    #[test]
    fn test_unknown_icon_is_error() {
        let err = "page1".parse::<NavIcon>().unwrap_err();
        assert!(matches!(err, NavError::UnknownIcon(name) if name == "page1"));
    }
}
