use serde::{Deserialize, Serialize};

/// Corner of the map a control is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::TopLeft => write!(f, "topleft"),
            Position::TopRight => write!(f, "topright"),
            Position::BottomLeft => write!(f, "bottomleft"),
            Position::BottomRight => write!(f, "bottomright"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_names_match_serde() {
        for position in [
            Position::TopLeft,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ] {
            let json = serde_json::to_value(position).unwrap();
            assert_eq!(json, position.to_string());
        }
    }
}
