//! Template engine setup. Templates are embedded at compile time so the
//! binary has no runtime directory dependency, and the engine gets an
//! `image_url` function wired to the image resolver.

use std::collections::HashMap;

use tera::{Tera, Value};

use crate::content::image;
use crate::content::models::ImageRef;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("home.html", include_str!("../templates/home.html")),
    ("about.html", include_str!("../templates/about.html")),
    ("blog/index.html", include_str!("../templates/blog/index.html")),
    ("blog/post.html", include_str!("../templates/blog/post.html")),
    (
        "portfolio/index.html",
        include_str!("../templates/portfolio/index.html"),
    ),
    (
        "portfolio/couple.html",
        include_str!("../templates/portfolio/couple.html"),
    ),
    ("venues.html", include_str!("../templates/venues.html")),
    ("vendors.html", include_str!("../templates/vendors.html")),
    ("contact.html", include_str!("../templates/contact.html")),
    ("not_found.html", include_str!("../templates/not_found.html")),
];

pub fn build_templates(project_id: &str, dataset: &str) -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.to_vec())?;
    tera.register_function(
        "image_url",
        ImageUrlFn {
            project_id: project_id.to_string(),
            dataset: dataset.to_string(),
        },
    );
    Ok(tera)
}

/// `{{ image_url(image=post.mainImage, w=800, h=600) }}` — resolves an
/// image field to a CDN URL, falling back like the resolver does. `w` and
/// `h` must be given together to request a crop.
struct ImageUrlFn {
    project_id: String,
    dataset: String,
}

impl tera::Function for ImageUrlFn {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let image: ImageRef = args
            .get("image")
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default();

        let size = match (
            args.get("w").and_then(Value::as_u64),
            args.get("h").and_then(Value::as_u64),
        ) {
            (Some(w), Some(h)) => Some((w as u32, h as u32)),
            _ => None,
        };

        Ok(Value::String(image::resolve(
            &self.project_id,
            &self.dataset,
            &image,
            size,
        )))
    }
}
