use std::sync::LazyLock;

use actix_web::http::StatusCode;
use tera::{Context, Tera};

use crate::models::{page_meta::PageMeta, pokemon_page::PokemonPage};

static TEMPLATES: LazyLock<Tera> = LazyLock::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("pokemon.html", include_str!("../templates/pokemon.html")),
        ("error.html", include_str!("../templates/error.html")),
    ])
    .expect("Failed to parse built-in templates");
    tera
});

pub fn render_pokemon(meta: &PageMeta, pokemon: &PokemonPage) -> tera::Result<String> {
    let mut context = Context::new();
    context.insert("meta", meta);
    context.insert("pokemon", pokemon);
    TEMPLATES.render("pokemon.html", &context)
}

pub fn render_error(status_code: StatusCode, detail: Option<&str>) -> tera::Result<String> {
    let mut context = Context::new();
    context.insert("status", &status_code.as_u16());
    context.insert("reason", status_code.canonical_reason().unwrap_or("Error"));
    context.insert("detail", &detail);
    TEMPLATES.render("error.html", &context)
}
