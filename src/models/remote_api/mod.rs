mod pokemon;
mod pokemon_sprites;

pub use pokemon::{ApiNamedResource, ApiPokemon, ApiPokemonMove, ApiPokemonType};
pub use pokemon_sprites::{ApiPokemonSprite, ApiPokemonSprites, ApiPokemonSpritesOther};
