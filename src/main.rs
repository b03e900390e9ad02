use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serverhi::article::{Article, Category};
use serverhi::config::Config;
use serverhi::repository::{BuildMode, ContentRepository};
use serverhi::route::{decode_segment, Routes};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Loads, checks, and queries the ServerHi article collection.
#[derive(Parser)]
#[command(name = "serverhi", version)]
struct Cli {
    /// The project directory, or any directory inside it.
    #[arg(short, long, default_value = ".")]
    project: PathBuf,

    /// Make drafts reachable by slug, as in a development build.
    #[arg(long)]
    drafts: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load every article and report the ones that were rejected.
    Check,

    /// List public articles, newest first.
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long)]
        json: bool,
    },

    /// Show one article.
    Show {
        slug: String,

        #[arg(long)]
        json: bool,

        /// Print the rendered HTML body.
        #[arg(long)]
        html: bool,
    },

    /// List the articles in a category.
    Category { slug: String },

    /// List the articles with a tag, given as a (percent-encoded) route
    /// segment such as `CI%2FCD`.
    Tag { segment: String },

    /// List the articles related to an article.
    Related {
        slug: String,

        /// Defaults to the site's `relatedCount`.
        #[arg(long)]
        count: Option<usize>,
    },

    /// List the configured categories with their article counts.
    Categories,

    /// List every tag with its article count.
    Tags,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter_layer = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::from_directory(&cli.project).context("loading configuration")?;
    let routes = Routes::new(&config.site.url);
    let mode = match cli.drafts {
        true => BuildMode::Development,
        false => BuildMode::Production,
    };
    let repository = ContentRepository::from_config(config).with_mode(mode);
    let catalog = repository.initialize().context("loading content")?;

    match cli.command {
        Command::Check => {
            for rejected in catalog.rejected() {
                println!("{}: {}", rejected.path.display(), rejected.error);
            }
            println!(
                "{} published, {} drafts, {} rejected",
                catalog.articles().len(),
                catalog.drafts().len(),
                catalog.rejected().len()
            );
            if !catalog.rejected().is_empty() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::List { page, json } => {
            let page = match repository.listing_page(page)? {
                Some(page) => page,
                None => bail!("page {} is past the last page", page),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(page.items)?);
            } else {
                for article in page.items {
                    print_article(article, &routes)?;
                }
                println!("page {} of {}", page.number, page.total_pages);
            }
        }
        Command::Show { slug, json, html } => {
            let article = repository.get_by_slug(&slug)?;
            if json {
                println!("{}", serde_json::to_string_pretty(article)?);
            } else if html {
                print!("{}", article.html());
            } else {
                print_article(article, &routes)?;
                println!("  {}", article.description);
                println!("  category: {}", article.category);
                println!("  tags: {}", article.tags.join(", "));
                println!("  by {}, {} min read", article.author, article.reading_time());
                for heading in article.headings() {
                    let indent = "  ".repeat(heading.level as usize);
                    println!("{}{} (#{})", indent, heading.text, heading.id);
                }
            }
        }
        Command::Category { slug } => {
            if repository.config().category(&slug).is_none() {
                bail!("category `{}` is not defined", slug);
            }
            for article in repository.get_by_category(&slug)? {
                print_article(article, &routes)?;
            }
        }
        Command::Tag { segment } => {
            let tag = decode_segment(&segment)?;
            for article in repository.get_by_tag(&tag)? {
                print_article(article, &routes)?;
            }
        }
        Command::Related { slug, count } => {
            let article = repository.get_by_slug(&slug)?;
            let related = match count {
                Some(count) => repository.get_related(article, count)?,
                None => repository.related(article)?,
            };
            for article in related {
                print_article(article, &routes)?;
            }
        }
        Command::Categories => {
            let counts = catalog.category_counts();
            for category in &repository.config().categories {
                let count = category
                    .slug
                    .parse::<Category>()
                    .ok()
                    .and_then(|c| counts.get(&c))
                    .copied()
                    .unwrap_or(0);
                println!(
                    "{:<16} {:>3}  {}  {}",
                    category.slug,
                    count,
                    category.name,
                    routes.category(&category.slug)?
                );
            }
        }
        Command::Tags => {
            for (tag, count) in catalog.tags() {
                println!("{:<24} {:>3}  {}", tag, count, routes.tag(tag)?);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_article(article: &Article, routes: &Routes) -> Result<()> {
    println!(
        "{}  {:<32} {}{}",
        article.publish_date,
        article.slug,
        article.title,
        if article.draft { " [draft]" } else { "" }
    );
    println!("            {}", routes.article(&article.slug)?);
    Ok(())
}
