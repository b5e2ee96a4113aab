use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::domain::menu::{entities::Dish, ports::MenuCatalog};

/// In-memory menu dataset decoded from a CSV file at startup.
///
/// Rows without a dish name or with an unparseable price are dropped, as are
/// rows the CSV decoder cannot read at all. A missing or unreadable file
/// degrades to an empty catalog rather than failing startup.
#[derive(Debug, Clone, Default)]
pub struct CsvMenuCatalog {
    dishes: Vec<Dish>,
}

/// Raw CSV row before normalization. Everything is optional so that a
/// partially-filled row can still be judged on the fields that matter.
#[derive(Debug, Deserialize)]
struct MenuRow {
    #[serde(default)]
    dish_id: Option<String>,
    #[serde(default)]
    dish_name: Option<String>,
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    spice_level: Option<String>,
    #[serde(default)]
    is_vegetarian: Option<String>,
    #[serde(default)]
    cuisine_origin: Option<String>,
    #[serde(default)]
    dish_type: Option<String>,
}

impl CsvMenuCatalog {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => {
                let catalog = Self::from_reader(file);
                tracing::info!(
                    path = %path.display(),
                    dishes = catalog.dishes.len(),
                    "menu dataset loaded"
                );
                catalog
            }
            Err(err) => {
                tracing::error!(path = %path.display(), "failed to open menu dataset: {err}");
                Self::default()
            }
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Self {
        let mut dishes = Vec::new();
        let mut csv_reader = csv::Reader::from_reader(reader);

        for (index, record) in csv_reader.deserialize::<MenuRow>().enumerate() {
            match record {
                Ok(row) => {
                    if let Some(dish) = normalize_row(index, row) {
                        dishes.push(dish);
                    }
                }
                Err(err) => {
                    tracing::warn!(row = index, "skipping unreadable menu row: {err}");
                }
            }
        }

        Self { dishes }
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

impl MenuCatalog for CsvMenuCatalog {
    fn dishes(&self) -> Vec<Dish> {
        self.dishes.clone()
    }
}

fn normalize_row(index: usize, row: MenuRow) -> Option<Dish> {
    let dish_name = row.dish_name.filter(|name| !name.trim().is_empty())?;
    // f64 parsing accepts "NaN" and "inf"; neither is a valid price, and a
    // NaN in the catalog would make the price sort ill-defined.
    let price = row
        .price
        .as_deref()?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())?;

    Some(Dish {
        dish_id: row
            .dish_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| index.to_string()),
        dish_name,
        price,
        description: row.description.unwrap_or_default(),
        spice_level: row.spice_level.unwrap_or_default(),
        is_vegetarian: parse_vegetarian(row.is_vegetarian.as_deref()),
        cuisine_origin: row.cuisine_origin.unwrap_or_default(),
        dish_type: row.dish_type.unwrap_or_default(),
    })
}

/// "yes"/"no" map to known states; anything else is unknown.
fn parse_vegetarian(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
dish_id,dish_name,price,description,spice_level,is_vegetarian,cuisine_origin,dish_type
1,Chicken Curry,12.50,Rich and creamy,hot,no,Indian,Main Course
2,Paneer Tikka,9.00,Char-grilled cottage cheese,medium,yes,Indian,Appetizer
3,,7.00,Nameless,mild,yes,Indian,Main Course
4,Broken Price,abc,Unparseable price,mild,yes,Indian,Main Course
5,Mystery Bowl,11.00,Chef's choice,medium,sometimes,Fusion,Main Course
,Unlabeled Soup,4.25,No id in the source data,mild,YES,Continental,Appetizer
";

    #[test]
    fn valid_rows_are_kept_and_invalid_rows_dropped() {
        let catalog = CsvMenuCatalog::from_reader(SAMPLE_CSV.as_bytes());
        let dishes = catalog.dishes();

        let names: Vec<_> = dishes.iter().map(|d| d.dish_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Chicken Curry", "Paneer Tikka", "Mystery Bowl", "Unlabeled Soup"]
        );
    }

    #[test]
    fn vegetarian_flag_is_tri_state() {
        let catalog = CsvMenuCatalog::from_reader(SAMPLE_CSV.as_bytes());
        let dishes = catalog.dishes();

        let by_name = |name: &str| {
            dishes
                .iter()
                .find(|d| d.dish_name == name)
                .unwrap_or_else(|| panic!("missing {name}"))
                .is_vegetarian
        };

        assert_eq!(by_name("Chicken Curry"), Some(false));
        assert_eq!(by_name("Paneer Tikka"), Some(true));
        assert_eq!(by_name("Mystery Bowl"), None);
        assert_eq!(by_name("Unlabeled Soup"), Some(true));
    }

    #[test]
    fn missing_dish_id_falls_back_to_the_row_index() {
        let catalog = CsvMenuCatalog::from_reader(SAMPLE_CSV.as_bytes());
        let dishes = catalog.dishes();

        let soup = dishes
            .iter()
            .find(|d| d.dish_name == "Unlabeled Soup")
            .unwrap();
        assert_eq!(soup.dish_id, "5");
    }

    #[test]
    fn non_finite_prices_are_dropped_at_load_time() {
        let csv = "\
dish_id,dish_name,price,description,spice_level,is_vegetarian,cuisine_origin,dish_type
1,Ghost Dish,NaN,Not a number,mild,yes,Indian,Main Course
2,Bottomless Buffet,inf,Unbounded,mild,yes,Indian,Main Course
3,Refund Special,-inf,Negative infinity,mild,yes,Indian,Main Course
4,Real Dish,5.00,Priced like a real dish,mild,yes,Indian,Main Course
";

        let catalog = CsvMenuCatalog::from_reader(csv.as_bytes());
        let dishes = catalog.dishes();

        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].dish_name, "Real Dish");
        assert!(dishes.iter().all(|d| d.price.is_finite()));
    }

    #[test]
    fn missing_file_degrades_to_an_empty_catalog() {
        let catalog = CsvMenuCatalog::load("/nonexistent/final_structured_menu.csv");

        assert!(catalog.is_empty());
        assert!(catalog.dishes().is_empty());
    }

    #[test]
    fn garbage_input_yields_an_empty_catalog() {
        let catalog = CsvMenuCatalog::from_reader(&b"not,a\x00menu"[..]);

        assert!(catalog.is_empty());
    }
}
