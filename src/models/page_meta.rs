use serde::Serialize;

#[derive(Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    pub fn describe(id: &str, name: &str) -> Self {
        Self {
            title: format!("Pokémon #{id}"),
            description: format!("Details for the Pokémon {name}"),
        }
    }

    pub fn fallback() -> Self {
        Self {
            title: "Pokémon page".into(),
            description: "Details for one Pokémon".into(),
        }
    }
}
