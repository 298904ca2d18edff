use crate::{
    models::{page_meta::PageMeta, remote_api::ApiPokemon},
    req_caching::{self, REVALIDATE},
};

pub async fn page_meta(req_client: &reqwest::Client, id: &str) -> PageMeta {
    page_meta_at(req_client, &req_caching::pokemon_url(id), id).await
}

async fn page_meta_at(req_client: &reqwest::Client, url: &str, id: &str) -> PageMeta {
    match req_caching::get_json::<ApiPokemon, ()>(req_client, url, REVALIDATE, |_| ()).await {
        Ok(pokemon) => PageMeta::describe(id, &pokemon.name),
        Err(()) => PageMeta::fallback(),
    }
}
