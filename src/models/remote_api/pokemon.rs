use serde::Deserialize;

use super::ApiPokemonSprites;

#[derive(Deserialize, Default)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    pub weight: u32,
    pub moves: Vec<ApiPokemonMove>,
    pub types: Vec<ApiPokemonType>,
    pub sprites: ApiPokemonSprites,
}

#[derive(Deserialize, Default)]
pub struct ApiPokemonMove {
    #[serde(rename = "move")]
    pub move_: ApiNamedResource,
}

#[derive(Deserialize, Default)]
pub struct ApiPokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: ApiNamedResource,
}

#[derive(Deserialize, Default)]
pub struct ApiNamedResource {
    pub name: String,
}
