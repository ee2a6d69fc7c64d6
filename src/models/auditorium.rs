use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Схема зала так, как её отдаёт источник схем.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditoriumDto {
    // Порядок рядов из документа важен - поиск идёт по нему
    #[serde(
        rename = "Rows",
        default,
        deserialize_with = "ordered_rows::deserialize",
        serialize_with = "ordered_rows::serialize"
    )]
    pub rows: Vec<(String, Vec<SeatDto>)>,
    #[serde(rename = "Corridors", default)]
    pub corridors: Vec<CorridorDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatDto {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Category")]
    pub category: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorridorDto {
    #[serde(rename = "Number")]
    pub number: i32,
    #[serde(rename = "InvolvedRowNames", default)]
    pub involved_row_names: Vec<String>,
}

// JSON-объект "Rows" <-> упорядоченный список пар (ряд, места)
mod ordered_rows {
    use super::*;

    type Rows = Vec<(String, Vec<SeatDto>)>;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Rows, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowsVisitor;

        impl<'de> Visitor<'de> for RowsVisitor {
            type Value = Rows;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of row names to seats")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Rows, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut rows = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, seats)) = access.next_entry::<String, Vec<SeatDto>>()? {
                    rows.push((name, seats));
                }
                Ok(rows)
            }
        }

        deserializer.deserialize_map(RowsVisitor)
    }

    pub fn serialize<S>(rows: &Rows, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(rows.iter().map(|(name, seats)| (name, seats)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_keep_document_order() {
        let json = r#"{
            "Rows": {
                "C": [{"Name": "C1", "Category": 2}],
                "A": [{"Name": "A1", "Category": 1}, {"Name": "A2", "Category": 1}],
                "B": []
            },
            "Corridors": [{"Number": 1, "InvolvedRowNames": ["A", "B"]}]
        }"#;

        let dto: AuditoriumDto = serde_json::from_str(json).unwrap();

        let names: Vec<&str> = dto.rows.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
        assert_eq!(dto.rows[1].1[1].name, "A2");
        assert_eq!(dto.corridors.len(), 1);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let dto: AuditoriumDto = serde_json::from_str("{}").unwrap();
        assert!(dto.rows.is_empty());
        assert!(dto.corridors.is_empty());
    }

    #[test]
    fn serializes_back_in_the_same_order() {
        let dto = AuditoriumDto {
            rows: vec![
                ("B".to_string(), vec![SeatDto { name: "B1".to_string(), category: 3 }]),
                ("A".to_string(), Vec::new()),
            ],
            corridors: Vec::new(),
        };

        let json = serde_json::to_string(&dto).unwrap();

        assert!(json.find("\"B\"").unwrap() < json.find("\"A\"").unwrap());
    }
}
