use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use dotenvy::dotenv;

mod api;
mod catalog;
mod compose;
mod config;
mod credentials;
mod pipeline;
mod reference;
mod session;
mod store;
mod types;
mod utils;

use api::gemini::GeminiClient;
use api::media;
use credentials::{mask_secret, CredentialStore};
use pipeline::{Pipeline, StageError};
use session::Session;
use store::StateStore;
use types::{
    new_record_id, AspectRatio, GenerationConfig, ModelTier, PromptFormat, Resolution,
    UploadedImage, MAX_IMAGE_COUNT, MIN_IMAGE_COUNT,
};
use utils::logging::init_logging;

fn usage() -> &'static str {
    "Usage: prism-studio <command>\n\
     \n\
     Source material:\n\
     \x20 add-image <path>...        load images as analysis sources\n\
     \x20 clear-images               drop all uploaded images\n\
     \x20 set-text <text>            set the source text\n\
     \n\
     Pipeline:\n\
     \x20 analyze                    deconstruct the source material\n\
     \x20 refine                     rewrite the prompt with the active modifiers\n\
     \x20 generate [--out <dir>]     render images from the current prompt\n\
     \n\
     Prompt & modifiers:\n\
     \x20 prompt [text]              show or replace the working prompt\n\
     \x20 categories                 list modifier categories by group\n\
     \x20 options <category>         list the values of one category\n\
     \x20 select <category> <value>  toggle a value in a category\n\
     \x20 selections [category]      show active selections\n\
     \x20 custom [text]              show or set the custom details line\n\
     \x20 format <natural|json|yaml> refined prompt output format\n\
     \x20 compose                    preview the composed modifier string\n\
     \n\
     Generation config & references:\n\
     \x20 config aspect-ratio <1:1|3:4|4:3|16:9|9:16>\n\
     \x20 config resolution <1K|2K|4K>   (honored by the pro model only)\n\
     \x20 config model <standard|pro>\n\
     \x20 config count <1-4>\n\
     \x20 refs                       list reference candidates\n\
     \x20 refs toggle <id>           select/deselect a reference\n\
     \x20 refs show <id>             print a candidate's preview data URL\n\
     \n\
     Other:\n\
     \x20 gallery                    list generated images, newest first\n\
     \x20 keys [list|add <name> <secret>|use <index>|remove <index>]\n\
     \x20 status                     summarize the session\n\
     \x20 reset                      clear all session state"
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let _logging_guards = init_logging();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("status");
    let rest = &args[2.min(args.len())..];

    let store = StateStore::open();
    let mut session = Session::load(store.clone());
    let mut credentials = CredentialStore::open(store);
    let mut pipeline = Pipeline::new(GeminiClient);

    match command {
        "status" => print_status(&session, &credentials),
        "add-image" => cmd_add_images(&mut session, rest).await?,
        "clear-images" => {
            session.clear_images();
            println!("Cleared all uploaded images.");
        }
        "set-text" => {
            let text = rest.join(" ");
            session.set_source_text(&text);
            println!("Source text set ({} chars).", text.len());
        }
        "analyze" => match pipeline.analyze(&mut session, &credentials).await {
            Ok(()) => print_analysis(&session),
            Err(err) => report_stage_error(err),
        },
        "refine" => match pipeline.refine(&mut session, &credentials).await {
            Ok(()) => {
                println!("Refined prompt:\n{}", session.current_prompt);
            }
            Err(err) => report_stage_error(err),
        },
        "generate" => {
            let out_dir = parse_out_dir(rest)?;
            match pipeline.generate(&mut session, &credentials).await {
                Ok(added) => {
                    println!("Generated {added} image(s).");
                    if let Some(dir) = out_dir {
                        write_gallery_head(&session, added, &dir)?;
                    }
                }
                Err(err) => report_stage_error(err),
            }
        }
        "prompt" => {
            if rest.is_empty() {
                if session.current_prompt.is_empty() {
                    println!("No working prompt yet. Run `analyze` or set one here.");
                } else {
                    println!("{}", session.current_prompt);
                }
            } else {
                session.set_prompt(&rest.join(" "));
                println!("Prompt updated.");
            }
        }
        "categories" => print_categories(&session),
        "options" => {
            let key = rest
                .first()
                .ok_or_else(|| anyhow!("Usage: prism-studio options <category>"))?;
            let category = find_category(key)?;
            println!("{} ({}):", category.label, category.key);
            for option in category.options {
                println!("  {option}");
            }
        }
        "select" => cmd_select(&mut session, rest)?,
        "selections" => print_selections(&session, rest.first().map(String::as_str)),
        "custom" => {
            if rest.is_empty() {
                if session.custom_modifiers.is_empty() {
                    println!("No custom details set.");
                } else {
                    println!("Custom details: {}", session.custom_modifiers);
                }
            } else {
                session.set_custom_modifiers(&rest.join(" "));
                println!("Custom details updated.");
            }
        }
        "format" => {
            let value = rest
                .first()
                .ok_or_else(|| anyhow!("Usage: prism-studio format <natural|json|yaml>"))?;
            let format = PromptFormat::parse(value)
                .ok_or_else(|| anyhow!("Unknown format '{value}' (natural, json, yaml)"))?;
            session.set_prompt_format(format);
            println!("Prompt format set to {}.", format.as_str());
        }
        "compose" => {
            let composed = compose::compose(&session.selections, &session.custom_modifiers);
            if composed.is_empty() {
                println!("Nothing selected; the composed modifier string is empty.");
            } else {
                println!("{composed}");
            }
        }
        "config" => cmd_config(&mut session, rest)?,
        "refs" => cmd_refs(&mut session, rest)?,
        "gallery" => print_gallery(&session),
        "keys" => cmd_keys(&mut credentials, rest)?,
        "reset" => {
            session.reset();
            println!("Session state cleared.");
        }
        "help" | "--help" | "-h" => println!("{}", usage()),
        other => {
            println!("Unknown command '{other}'.\n\n{}", usage());
        }
    }

    Ok(())
}

async fn cmd_add_images(session: &mut Session, paths: &[String]) -> Result<()> {
    if paths.is_empty() {
        return Err(anyhow!("Usage: prism-studio add-image <path>..."));
    }

    let mut images = Vec::new();
    for path in paths {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {path}"))?;
        let mime_type = media::detect_mime_type(&bytes)
            .filter(|mime| mime.starts_with("image/"))
            .ok_or_else(|| anyhow!("{path} does not look like an image"))?;
        images.push(UploadedImage {
            id: new_record_id(),
            data: media::encode_base64(&bytes),
            mime_type,
        });
    }

    let added = images.len();
    session.add_images(images);
    println!(
        "Added {added} image(s); {} now loaded.",
        session.images.len()
    );
    Ok(())
}

fn cmd_select(session: &mut Session, args: &[String]) -> Result<()> {
    let (key, value_parts) = args
        .split_first()
        .ok_or_else(|| anyhow!("Usage: prism-studio select <category> <value>"))?;
    if value_parts.is_empty() {
        return Err(anyhow!("Usage: prism-studio select <category> <value>"));
    }
    let category = find_category(key)?;
    let requested = value_parts.join(" ");
    let value = catalog::resolve_option(category, &requested).ok_or_else(|| {
        anyhow!(
            "'{requested}' is not a {} option; see `prism-studio options {}`",
            category.label,
            category.key
        )
    })?;

    let values = session.toggle_selection(category, value);
    if values.iter().any(|entry| entry == value) {
        println!("Selected '{value}' for {}.", category.label);
    } else {
        println!("Deselected '{value}' from {}.", category.label);
    }
    Ok(())
}

fn cmd_config(session: &mut Session, args: &[String]) -> Result<()> {
    let (field, value) = match (args.first(), args.get(1)) {
        (Some(field), Some(value)) => (field.as_str(), value.as_str()),
        _ => {
            let generation = &session.generation;
            println!(
                "aspect-ratio={} resolution={} model={} count={}",
                generation.aspect_ratio.as_str(),
                generation.resolution.as_str(),
                generation.model.as_str(),
                generation.count
            );
            return Ok(());
        }
    };

    let mut generation: GenerationConfig = session.generation.clone();
    match field {
        "aspect-ratio" => {
            generation.aspect_ratio = AspectRatio::parse(value)
                .ok_or_else(|| anyhow!("Unknown aspect ratio '{value}'"))?;
        }
        "resolution" => {
            generation.resolution =
                Resolution::parse(value).ok_or_else(|| anyhow!("Unknown resolution '{value}'"))?;
            if !generation.model.honors_resolution() {
                println!("Note: resolution only takes effect with `config model pro`.");
            }
        }
        "model" => {
            generation.model =
                ModelTier::parse(value).ok_or_else(|| anyhow!("Unknown model tier '{value}'"))?;
        }
        "count" => {
            let count: u8 = value
                .parse()
                .map_err(|_| anyhow!("Count must be a number between 1 and 4"))?;
            if !(MIN_IMAGE_COUNT..=MAX_IMAGE_COUNT).contains(&count) {
                return Err(anyhow!("Count must be between 1 and 4"));
            }
            generation.count = count;
        }
        other => {
            return Err(anyhow!(
                "Unknown config field '{other}' (aspect-ratio, resolution, model, count)"
            ))
        }
    }
    session.set_generation(generation);
    println!("Generation config updated.");
    Ok(())
}

fn cmd_refs(session: &mut Session, args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        None => {
            let candidates = session.candidates();
            if candidates.is_empty() {
                println!("No reference candidates; upload or generate images first.");
                return Ok(());
            }
            println!(
                "{} candidate(s), {} selected:",
                candidates.len(),
                session.selected_reference_ids.len()
            );
            for candidate in &candidates {
                let marker = if session
                    .selected_reference_ids
                    .iter()
                    .any(|id| *id == candidate.id)
                {
                    "[x]"
                } else {
                    "[ ]"
                };
                println!(
                    "  {marker} {:<10} {} ({})",
                    candidate.origin.tag(),
                    candidate.id,
                    candidate.mime_type
                );
            }
        }
        Some("toggle") => {
            let id = args
                .get(1)
                .ok_or_else(|| anyhow!("Usage: prism-studio refs toggle <id>"))?;
            let candidates = session.candidates();
            if !candidates.iter().any(|candidate| candidate.id == *id) {
                return Err(anyhow!("No reference candidate with id '{id}'"));
            }
            session.toggle_reference(id);
            let selected = session.selected_reference_ids.iter().any(|s| s == id);
            println!(
                "{} '{id}' ({} selected).",
                if selected { "Selected" } else { "Deselected" },
                session.selected_reference_ids.len()
            );
        }
        Some("show") => {
            let id = args
                .get(1)
                .ok_or_else(|| anyhow!("Usage: prism-studio refs show <id>"))?;
            let candidates = session.candidates();
            let candidate = candidates
                .iter()
                .find(|candidate| candidate.id == *id)
                .ok_or_else(|| anyhow!("No reference candidate with id '{id}'"))?;
            println!("{}", candidate.preview_url);
        }
        Some(other) => return Err(anyhow!("Unknown refs subcommand '{other}'")),
    }
    Ok(())
}

fn cmd_keys(credentials: &mut CredentialStore, args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        None | Some("list") => {
            if credentials.is_empty() {
                println!("No credentials stored. Add one with `keys add <name> <secret>`.");
                return Ok(());
            }
            let active = credentials.active_index();
            for (index, record) in credentials.records().iter().enumerate() {
                let marker = if active == Some(index) { "*" } else { " " };
                println!(
                    "{marker} [{index}] {} {} (added {})",
                    record.name,
                    mask_secret(&record.secret),
                    record.created_at.format("%Y-%m-%d")
                );
            }
        }
        Some("add") => {
            let name = args
                .get(1)
                .ok_or_else(|| anyhow!("Usage: prism-studio keys add <name> <secret>"))?;
            let secret = args
                .get(2)
                .ok_or_else(|| anyhow!("Usage: prism-studio keys add <name> <secret>"))?;
            if name.trim().is_empty() || secret.trim().is_empty() {
                return Err(anyhow!("Credential name and secret must be non-empty"));
            }
            credentials.add(name, secret);
            println!("Added credential '{}' and made it active.", name.trim());
        }
        Some("use") => {
            let index: usize = args
                .get(1)
                .and_then(|value| value.parse().ok())
                .ok_or_else(|| anyhow!("Usage: prism-studio keys use <index>"))?;
            if credentials.select(index) {
                println!("Credential [{index}] is now active.");
            } else {
                return Err(anyhow!("No credential at index {index}"));
            }
        }
        Some("remove") => {
            let index: usize = args
                .get(1)
                .and_then(|value| value.parse().ok())
                .ok_or_else(|| anyhow!("Usage: prism-studio keys remove <index>"))?;
            if credentials.delete(index) {
                println!("Removed credential [{index}].");
            } else {
                return Err(anyhow!("No credential at index {index}"));
            }
        }
        Some(other) => return Err(anyhow!("Unknown keys subcommand '{other}'")),
    }
    Ok(())
}

fn find_category(key: &str) -> Result<&'static catalog::Category> {
    catalog::find(key).ok_or_else(|| {
        anyhow!("Unknown category '{key}'; see `prism-studio categories` for the full list")
    })
}

fn parse_out_dir(args: &[String]) -> Result<Option<PathBuf>> {
    match args.first().map(String::as_str) {
        None => Ok(None),
        Some("--out") => {
            let dir = args
                .get(1)
                .ok_or_else(|| anyhow!("Missing value for --out"))?;
            Ok(Some(PathBuf::from(dir)))
        }
        Some(other) => Err(anyhow!("Unknown generate option '{other}'")),
    }
}

fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "png",
    }
}

/// Writes the `added` newest gallery entries to `dir`.
fn write_gallery_head(session: &Session, added: usize, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    for image in session.gallery.iter().take(added) {
        let Some(payload) = media::parse_data_url(&image.url) else {
            continue;
        };
        let Some(bytes) = media::decode_base64(&payload.data) else {
            continue;
        };
        let path = dir.join(format!(
            "{}.{}",
            image.id,
            extension_for_mime(&payload.mime_type)
        ));
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn report_stage_error(err: StageError) {
    match err {
        StageError::MissingCredential => {
            println!("No API credential is active.");
            println!("Add one with: prism-studio keys add <name> <secret>");
        }
        other => println!("{other}"),
    }
}

fn print_status(session: &Session, credentials: &CredentialStore) {
    println!(
        "credential: {}",
        if credentials.active_secret().is_some() {
            "active"
        } else {
            "missing"
        }
    );
    println!("source images: {}", session.images.len());
    println!(
        "source text: {}",
        if session.source_text.trim().is_empty() {
            "none".to_string()
        } else {
            format!("{} chars", session.source_text.len())
        }
    );
    println!(
        "analysis: {}",
        if session.analysis.is_some() {
            "present"
        } else {
            "none"
        }
    );
    println!(
        "prompt: {}",
        if session.current_prompt.is_empty() {
            "empty".to_string()
        } else {
            format!("{} chars", session.current_prompt.len())
        }
    );
    println!("active modifiers: {}", session.selections.total_selected());
    println!(
        "generation: model={} aspect={} resolution={} count={}",
        session.generation.model.as_str(),
        session.generation.aspect_ratio.as_str(),
        session.generation.resolution.as_str(),
        session.generation.count
    );
    println!(
        "references: {} selected of {} candidate(s)",
        session.selected_reference_ids.len(),
        session.candidates().len()
    );
    println!("gallery: {} image(s)", session.gallery.len());
}

fn print_analysis(session: &Session) {
    let Some(analysis) = &session.analysis else {
        return;
    };
    println!("Observation:\n{}\n", analysis.description);
    println!("Subject:     {}", analysis.subject);
    println!("Style:       {}", analysis.style);
    println!("Composition: {}", analysis.composition);
    println!("Lighting:    {}", analysis.lighting);
    println!("\nSuggested prompt (now the working prompt):\n{}", analysis.suggested_prompt);
}

fn print_categories(session: &Session) {
    let mut current_group = None;
    for category in catalog::CATEGORIES {
        if current_group != Some(category.group) {
            current_group = Some(category.group);
            println!("\n{}", category.group.label());
        }
        let selected = session.selections.get(category.key).len();
        if selected > 0 {
            println!(
                "  {:<14} {} ({} selected)",
                category.key,
                category.label,
                selected
            );
        } else {
            println!("  {:<14} {}", category.key, category.label);
        }
    }
}

fn print_selections(session: &Session, category_key: Option<&str>) {
    match category_key {
        Some(key) => {
            let Some(category) = catalog::find(key) else {
                println!("Unknown category '{key}'.");
                return;
            };
            let values = session.selections.get(category.key);
            if values.is_empty() {
                println!("Nothing selected for {}.", category.label);
            } else {
                println!("{}: {}", category.label, values.join(", "));
            }
        }
        None => {
            let mut any = false;
            for category in catalog::CATEGORIES {
                let values = session.selections.get(category.key);
                if !values.is_empty() {
                    any = true;
                    println!("{}: {}", category.label, values.join(", "));
                }
            }
            if !any {
                println!("No modifiers selected.");
            }
        }
    }
}

fn print_gallery(session: &Session) {
    if session.gallery.is_empty() {
        println!("The gallery is empty; run `generate` first.");
        return;
    }
    let total = session.gallery.len();
    for (index, image) in session.gallery.iter().enumerate() {
        let preview: String = image.prompt.chars().take(80).collect();
        let ellipsis = if image.prompt.chars().count() > 80 {
            "…"
        } else {
            ""
        };
        println!(
            "#{:<3} {} model={} prompt=\"{preview}{ellipsis}\"",
            total - index,
            image.id,
            image.model
        );
    }
}
