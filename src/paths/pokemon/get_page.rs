use actix_web::{
    get,
    http::StatusCode,
    web::{self, Data},
    Responder,
};

use crate::{
    macros::{resp_200_Ok_html, yeet_error},
    models::{pokemon_page::PokemonPage, remote_api::ApiPokemon},
    page_error::response_from_error,
    req_caching::{self, REVALIDATE},
    templates,
};

use super::metadata;

#[get("/pokemon/{id}")]
pub async fn get_page(id: web::Path<String>, req_client: Data<reqwest::Client>) -> impl Responder {
    let id = id.into_inner();
    let meta = metadata::page_meta(&req_client, &id).await;

    let res = req_caching::get_json::<ApiPokemon, _>(
        &req_client,
        &req_caching::pokemon_url(&id),
        REVALIDATE,
        |error| response_from_error(format!("Error encountered: {error}"), StatusCode::NOT_FOUND),
    )
    .await;
    let pokemon = yeet_error!(res);

    let html = templates::render_pokemon(&meta, &PokemonPage::from(&*pokemon)).map_err(|error| {
        response_from_error(
            format!("Error encountered: {error}"),
            StatusCode::INTERNAL_SERVER_ERROR,
        )
    });
    let html = yeet_error!(html);
    resp_200_Ok_html!(html)
}
