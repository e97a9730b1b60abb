use std::str::FromStr;

use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};
use oaksurveys_contact::{Composer, Draft, ENTRIES, Entry, Field};

use crate::{routes::AppState, template};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate<'a> {
    pub entries: &'a [Entry],
    pub notice: Option<String>,
    pub draft: Draft,
}

impl Default for ContactTemplate<'_> {
    fn default() -> Self {
        Self {
            entries: ENTRIES,
            notice: None,
            draft: Draft::default(),
        }
    }
}

pub async fn page() -> impl IntoResponse {
    template::render(ContactTemplate::default())
}

pub async fn action(
    State(app_state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> impl IntoResponse {
    let mut draft = Draft::default();
    for (name, value) in fields {
        // Names the form does not render are ignored.
        let Ok(field) = Field::from_str(&name) else {
            continue;
        };

        draft.update(field, value);
    }

    let composer = Composer::new(app_state.config.contact.address.as_str());
    match composer.submit(&draft) {
        // Hand composition over to the visitor's mail client; delivery is
        // outside this server's boundary.
        Ok(uri) => Redirect::to(&uri).into_response(),
        Err(err) => template::render(ContactTemplate {
            notice: Some(err.to_string()),
            draft,
            ..Default::default()
        })
        .into_response(),
    }
}
