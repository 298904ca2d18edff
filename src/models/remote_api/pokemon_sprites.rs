use serde::Deserialize;

#[derive(Deserialize, Clone, Default)]
pub struct ApiPokemonSprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    pub other: Option<ApiPokemonSpritesOther>,
}

#[derive(Deserialize, Clone, Default)]
pub struct ApiPokemonSpritesOther {
    pub dream_world: Option<ApiPokemonSprite>,
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<ApiPokemonSprite>,
}

#[derive(Deserialize, Clone, Default)]
pub struct ApiPokemonSprite {
    pub front_default: Option<String>,
}
