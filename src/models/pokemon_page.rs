use serde::Serialize;

use super::remote_api::{ApiPokemon, ApiPokemonSprites};

#[derive(Serialize)]
pub struct PokemonPage<'a> {
    pub id: u32,
    pub name: &'a str,
    pub primary_image: Option<&'a str>,
    pub moves: Vec<&'a str>,
    pub types: Vec<&'a str>,
    pub weight: u32,
    pub regular_sprites: SpritePair<'a>,
    pub shiny_sprites: SpritePair<'a>,
}

#[derive(Serialize)]
pub struct SpritePair<'a> {
    pub front: Option<&'a str>,
    pub back: Option<&'a str>,
}

impl<'a> From<&'a ApiPokemon> for PokemonPage<'a> {
    fn from(value: &'a ApiPokemon) -> Self {
        Self {
            id: value.id,
            name: &value.name,
            primary_image: primary_image(&value.sprites),
            moves: value.moves.iter().map(|m| m.move_.name.as_str()).collect(),
            types: value.types.iter().map(|t| t.type_.name.as_str()).collect(),
            weight: value.weight,
            regular_sprites: SpritePair {
                front: present(&value.sprites.front_default),
                back: present(&value.sprites.back_default),
            },
            shiny_sprites: SpritePair {
                front: present(&value.sprites.front_shiny),
                back: present(&value.sprites.back_shiny),
            },
        }
    }
}

// Candidates in display-preference order, first non-empty url wins.
fn primary_image(sprites: &ApiPokemonSprites) -> Option<&str> {
    let other = sprites.other.as_ref();
    let candidates = [
        other
            .and_then(|o| o.dream_world.as_ref())
            .and_then(|s| s.front_default.as_deref()),
        other
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|s| s.front_default.as_deref()),
        sprites.front_default.as_deref(),
    ];
    candidates.into_iter().flatten().find(|url| !url.is_empty())
}

fn present(url: &Option<String>) -> Option<&str> {
    url.as_deref().filter(|url| !url.is_empty())
}
