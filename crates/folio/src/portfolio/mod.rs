//! Portfolio generation: profile lookup, résumé reading, draft assembly and
//! narrative generation.

use std::path::PathBuf;
use std::time::Duration;

use folio_core::profile::{
    build_draft, is_valid_user_id, missing_fields, resume_url, FreelancerRecord, UserRecord,
};
use folio_core::taxonomy::Taxonomy;

use crate::prelude::{eprintln, println, *};
use crate::resume::{HttpResumeReader, ResumeReader, ResumeSource};

pub mod generator;
pub mod store;

pub use generator::{GeminiGenerator, NarrativeGenerator};
pub use store::{JsonFileStore, ProfileStore};

#[derive(Debug, clap::Args)]
pub struct StoreOptions {
    /// JSON profile store with `users` and `freelancers` collections
    #[clap(long, env = "FOLIO_STORE")]
    pub store: PathBuf,

    /// HTTP timeout in seconds for résumé downloads
    #[clap(long, env = "FOLIO_TIMEOUT", default_value = "30")]
    pub timeout: u64,
}

#[derive(Debug, clap::Parser)]
pub struct LookupOptions {
    /// The freelancer's user id (24 hex characters)
    pub user_id: String,

    #[clap(flatten)]
    pub profile: StoreOptions,
}

#[derive(Debug, clap::Parser)]
pub struct PortfolioOptions {
    /// The freelancer's user id (24 hex characters)
    pub user_id: String,

    #[clap(flatten)]
    pub profile: StoreOptions,

    /// API key for the generative-text service
    #[clap(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Model used for narrative generation
    #[clap(long, env = "FOLIO_MODEL", default_value = "gemini-1.5-pro")]
    pub model: String,
}

/// Records and résumé text for one freelancer, before generation.
#[derive(Debug, Default, serde::Serialize)]
pub struct ProfileLookup {
    pub user: Option<UserRecord>,
    pub freelancer: Option<FreelancerRecord>,
    pub resume_text: Option<String>,
}

async fn load_records(
    user_id: &str,
    store: &impl ProfileStore,
) -> Result<(Option<UserRecord>, Option<FreelancerRecord>)> {
    let user_id = user_id.trim();
    if !is_valid_user_id(user_id) {
        return Err(Error::InvalidUserId(user_id.to_string()).into());
    }

    let user = store.find_user(user_id).await?;
    let freelancer = store.find_freelancer(user_id).await?;

    if user.is_none() && freelancer.is_none() {
        return Err(Error::UserNotFound(user_id.to_string()).into());
    }
    if user.is_none() {
        log::warn!("No user record for {}", user_id);
    }
    if freelancer.is_none() {
        log::warn!("No freelancer record for {}", user_id);
    }

    let missing = missing_fields(user.as_ref(), freelancer.as_ref());
    if !missing.is_empty() {
        log::warn!("Profile {} is missing: {}", user_id, missing.join(", "));
    }

    Ok((user, freelancer))
}

/// Résumé text for the freelancer, or `None` when there is no résumé or it
/// could not be read.
async fn read_resume(
    freelancer: Option<&FreelancerRecord>,
    reader: &impl ResumeReader,
) -> Option<String> {
    let Some(url) = freelancer.and_then(resume_url) else {
        log::debug!("No résumé on file");
        return None;
    };

    // Stored résumés are uploads; only remote URLs are followed.
    let source = match ResumeSource::parse(url) {
        source @ ResumeSource::Url(_) => source,
        ResumeSource::Path(_) => {
            log::error!("Continuing without résumé: {:?} is not an http(s) URL", url);
            return None;
        }
    };

    match reader.read(&source).await {
        Ok(text) if text.is_empty() => {
            log::warn!("Résumé at {} has no extractable text", url);
            None
        }
        Ok(text) => Some(text),
        Err(e) => {
            log::error!("Continuing without résumé: {}", e);
            None
        }
    }
}

/// Fetch a freelancer's records and résumé text without generating anything.
pub async fn lookup_profile(
    user_id: &str,
    store: &impl ProfileStore,
    reader: &impl ResumeReader,
) -> Result<ProfileLookup> {
    let (user, freelancer) = load_records(user_id, store).await?;
    let resume_text = read_resume(freelancer.as_ref(), reader).await;

    Ok(ProfileLookup {
        user,
        freelancer,
        resume_text,
    })
}

/// Generate a portfolio document for a freelancer.
///
/// A résumé that cannot be fetched or parsed does not fail generation; the
/// draft is built from the profile records alone.
pub async fn generate_portfolio(
    user_id: &str,
    store: &impl ProfileStore,
    reader: &impl ResumeReader,
    generator: &impl NarrativeGenerator,
    taxonomy: &Taxonomy,
) -> Result<serde_json::Value> {
    let (user, freelancer) = load_records(user_id, store).await?;
    let resume_text = read_resume(freelancer.as_ref(), reader).await;

    let draft = build_draft(user.as_ref(), freelancer.as_ref(), resume_text, taxonomy);
    log::debug!(
        "Draft for {}: {} service categories, {} tools, résumé {}",
        draft.full_name,
        draft.services.len(),
        draft.tools.len(),
        if draft.resume_text.is_some() { "included" } else { "omitted" }
    );

    generator.generate(&draft).await
}

pub async fn lookup(options: LookupOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Store: {}", options.profile.store.display());
    }

    let store = JsonFileStore::open(&options.profile.store)?;
    let reader = HttpResumeReader::new(Duration::from_secs(options.profile.timeout))?;

    let found = lookup_profile(&options.user_id, &store, &reader).await?;
    println!("{}", serde_json::to_string_pretty(&found)?);

    Ok(())
}

pub async fn run(options: PortfolioOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Store: {}", options.profile.store.display());
        eprintln!("Model: {}", options.model);
    }

    let taxonomy = crate::taxonomy::load(global.taxonomy.as_deref())?;
    let store = JsonFileStore::open(&options.profile.store)?;
    let reader = HttpResumeReader::new(Duration::from_secs(options.profile.timeout))?;
    let generator = GeminiGenerator::new(&options.api_key, options.model)?;

    let portfolio =
        generate_portfolio(&options.user_id, &store, &reader, &generator, &taxonomy).await?;
    println!("{}", serde_json::to_string_pretty(&portfolio)?);

    Ok(())
}
