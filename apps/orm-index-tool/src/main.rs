//! CLI tool for merging XML entity mappings into an annotation index.
//!
//! Provides commands for:
//! - Unifying mapping documents with a compiled annotation index
//! - Inspecting the annotations an index holds for a class

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orm_index_core::classes::register_builtin_classes;
use orm_index_core::model::EntityMappings;
use orm_index_core::{AnnotationIndex, ClassDescriptor, ClassRegistry, Unifier, UnifierConfig};

/// Command-line arguments for the index tool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Merge mapping documents into an annotation index
    Unify {
        /// Annotation index (JSON) of compiled annotations
        #[arg(long)]
        index: Option<PathBuf>,

        /// Class descriptors (JSON array) the mappings may reference
        #[arg(long)]
        classes: PathBuf,

        /// Mapping documents (JSON), in persistence unit order
        #[arg(long = "mapping", required = true)]
        mappings: Vec<PathBuf>,

        /// Unifier configuration (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Where to write the merged index; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the annotations of an index
    Inspect {
        /// Annotation index (JSON)
        #[arg(long)]
        index: PathBuf,

        /// Only show this class
        #[arg(long)]
        class: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt::init();

    match args.command {
        Command::Unify {
            index,
            classes,
            mappings,
            config,
            output,
        } => unify(index.as_deref(), &classes, &mappings, config.as_deref(), output.as_deref()),
        Command::Inspect { index, class } => inspect(&index, class.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<UnifierConfig> {
    let mut config = match path {
        Some(path) => UnifierConfig::from_file(path)?,
        None => UnifierConfig::default(),
    };
    config.apply_env_overrides()?;
    Ok(config)
}

fn load_registry(path: &Path) -> Result<Arc<ClassRegistry>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read classes {}", path.display()))?;
    let descriptors: Vec<ClassDescriptor> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid class descriptors in {}", path.display()))?;

    let registry = ClassRegistry::new();
    register_builtin_classes(&registry)?;
    for descriptor in descriptors {
        if registry.contains(&descriptor.name) {
            tracing::debug!("Skipping already registered class {}", descriptor.name);
            continue;
        }
        registry.register(descriptor)?;
    }
    tracing::info!("Loaded {} classes", registry.len());
    Ok(Arc::new(registry))
}

fn load_mapping(path: &Path) -> Result<EntityMappings> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read mapping {}", path.display()))?;
    EntityMappings::from_json(&content).with_context(|| format!("Invalid mapping document {}", path.display()))
}

fn unify(
    index: Option<&Path>,
    classes: &Path,
    mappings: &[PathBuf],
    config: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let config = load_config(config)?;
    let registry = load_registry(classes)?;
    let index = match index {
        Some(path) => AnnotationIndex::from_file(path)
            .with_context(|| format!("Failed to load index {}", path.display()))?,
        None => AnnotationIndex::new(),
    };
    let documents = mappings
        .iter()
        .map(|path| load_mapping(path))
        .collect::<Result<Vec<_>>>()?;

    let unified = Unifier::new(config).unify(index, documents, registry)?;
    let json = unified.to_json()?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote merged index to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn inspect(path: &Path, class: Option<&str>) -> Result<()> {
    let index =
        AnnotationIndex::from_file(path).with_context(|| format!("Failed to load index {}", path.display()))?;

    let classes: Vec<_> = match class {
        Some(name) => vec![index
            .class(name)
            .with_context(|| format!("Class {} is not in the index", name))?],
        None => index.classes().collect(),
    };
    for info in classes {
        match &info.super_name {
            Some(super_name) => println!("{} extends {}", info.name, super_name),
            None => println!("{}", info.name),
        }
        for annotation in &info.annotations {
            let origin = if annotation.mocked { "xml" } else { "compiled" };
            let target = annotation
                .target
                .as_ref()
                .and_then(|t| t.member_name())
                .unwrap_or("<class>");
            println!("  @{} on {} [{}]", annotation.name, target, origin);
        }
    }
    if class.is_none() && !index.global_annotations().is_empty() {
        println!("<global>");
        for annotation in index.global_annotations() {
            println!("  @{}", annotation.name);
        }
    }
    Ok(())
}
