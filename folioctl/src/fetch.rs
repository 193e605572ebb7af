use anyhow::Context;
use clap::Args;
use folio_config::Config;
use folio_core::{ContentClient, ImageResolver, LinkTarget, classify_link};
use folio_model::{
    ContentId, ContentKind, CoverArt, RepresentativeWork, ResearchHighlight,
};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Collection to fetch
    kind: ContentKind,

    /// Only cover arts marked active on the backend
    #[arg(long, default_value_t = false)]
    active_only: bool,

    /// Print rows as a JSON array
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// One card as a host would draw it.
#[derive(Debug, Serialize, PartialEq)]
struct Row {
    id: ContentId,
    label: String,
    image: String,
    link: Option<String>,
    external: bool,
}

impl Row {
    fn new(
        id: ContentId,
        label: &str,
        image_path: &str,
        link: Option<&str>,
        images: &ImageResolver,
    ) -> Self {
        let target = link.and_then(classify_link);
        let external = matches!(target, Some(LinkTarget::External(_)));
        let link = target.map(|target| match target {
            LinkTarget::External(url) => url,
            LinkTarget::Internal(path) => path,
        });
        Self {
            id,
            label: label.to_string(),
            image: images.resolve(Some(image_path)),
            link,
            external,
        }
    }
}

pub async fn run(args: &FetchArgs, config: &Config) -> anyhow::Result<()> {
    let client = ContentClient::new(&config.api)
        .context("failed to build content client")?;
    let images = client.images();

    let rows: Vec<Row> = match args.kind {
        ContentKind::CoverArts => client
            .cover_arts(args.active_only)
            .await?
            .iter()
            .map(|c: &CoverArt| {
                Row::new(
                    c.id,
                    &c.title,
                    &c.image_path,
                    c.link.as_deref(),
                    images,
                )
            })
            .collect(),
        ContentKind::RepresentativeWorks => client
            .representative_works()
            .await?
            .iter()
            .map(|w: &RepresentativeWork| {
                Row::new(
                    w.id,
                    &w.title,
                    &w.image_path,
                    w.link.as_deref(),
                    images,
                )
            })
            .collect(),
        ContentKind::ResearchHighlights => client
            .research_highlights()
            .await?
            .iter()
            .map(|h: &ResearchHighlight| {
                Row::new(
                    h.id,
                    h.alt(),
                    &h.image_path,
                    h.link.as_deref(),
                    images,
                )
            })
            .collect(),
    };
    info!(kind = %args.kind, count = rows.len(), "fetched");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for row in &rows {
        println!(
            "{}\t{}\t{}\t{}",
            row.id,
            row.label,
            row.image,
            row.link.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn rows_resolve_images_and_links() {
        let base = Url::parse("https://api.example.org/").expect("url");
        let images = ImageResolver::new(&base);

        let row = Row::new(
            ContentId(4),
            "Cover",
            "/uploads/c.png",
            Some("doi.org/10.1/x"),
            &images,
        );
        assert_eq!(row.image, "https://api.example.org/uploads/c.png");
        assert_eq!(row.link.as_deref(), Some("https://doi.org/10.1/x"));
        assert!(row.external);

        let row =
            Row::new(ContentId(5), "Page", "p.png", Some("research"), &images);
        assert_eq!(row.link.as_deref(), Some("/research"));
        assert!(!row.external);

        let row = Row::new(ContentId(6), "None", "p.png", None, &images);
        assert_eq!(row.link, None);
    }
}
