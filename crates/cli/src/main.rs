use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::str::FromStr;
use promo_core::{
    Audience, AudiencePolicy, CampaignFields, ConfigValues, CoreConfig, EmphasisEntry,
    EmphasisKind, GenerationBatch, PromoService, Tone,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "promo")]
#[command(about = "Community promotion post generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one post per tone for a campaign
    Generate {
        /// Product name
        #[arg(long)]
        product: String,
        /// Price as it should appear in the post (e.g. "89,000원")
        #[arg(long)]
        price: String,
        /// Campaign start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Campaign end date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Target community (ppomppu, fmkorea, womad)
        #[arg(long)]
        audience: String,
        /// Selling point, repeatable; prefix with a kind as `coupon:...`
        #[arg(long = "emphasis", value_parser = EmphasisEntry::from_str)]
        emphasis: Vec<EmphasisEntry>,
        /// Previously successful copy to keep for reference
        #[arg(long)]
        reference: Option<String>,
        /// Accept audiences outside the supported set
        #[arg(long)]
        fallback: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List supported communities and their tone order
    Audiences,
    /// List tones
    Tones,
    /// List emphasis kinds with example text
    EmphasisKinds,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("promo=warn".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let cfg = CoreConfig::from_values(ConfigValues::from_env())?;

    match cli.command {
        Some(Commands::Generate {
            product,
            price,
            start,
            end,
            audience,
            emphasis,
            reference,
            fallback,
            json,
        }) => {
            let cfg = if fallback {
                cfg.with_audience_policy(AudiencePolicy::Fallback)
            } else {
                cfg
            };
            let service = PromoService::new(cfg);
            let fields = CampaignFields {
                product_name: product,
                price,
                start_date: start,
                end_date: end,
                audience,
                emphasis_items: emphasis,
                reference_sample: reference,
            };

            match service.generate_variants(&fields) {
                Ok(batch) if json => println!("{}", serde_json::to_string_pretty(&batch)?),
                Ok(batch) => print!("{}", format_batch(&batch)),
                Err(e) => {
                    eprintln!("Error generating posts: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Audiences) => {
            let service = PromoService::new(cfg);
            for audience in Audience::known() {
                let tones: Vec<&str> = service
                    .registry()
                    .tones_for(&audience)
                    .iter()
                    .map(|tone| tone.id())
                    .collect();
                println!("{:<8} {:<6} {}", audience.id(), audience.label(), tones.join(", "));
            }
        }
        Some(Commands::Tones) => {
            for tone in Tone::ALL {
                println!("{:<14} {}", tone.id(), tone.label());
            }
        }
        Some(Commands::EmphasisKinds) => {
            for kind in EmphasisKind::ALL {
                println!("{:<8} {:<8} {}", kind.id(), kind.label(), kind.hint());
            }
        }
        None => {
            println!("Use 'promo --help' for commands");
        }
    }

    Ok(())
}

/// Plain-text rendering of a batch, one block per variant.
fn format_batch(batch: &GenerationBatch) -> String {
    let mut out = format!("{}\n", batch.headline);
    for variant in &batch.variants {
        out.push_str(&format!(
            "\n버전 {} {}\n{}\n예상 반응도: {}\n",
            variant.variant_id, variant.tone_label, variant.rendered_text, variant.estimated_engagement
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_with_repeated_emphasis() {
        let cli = Cli::try_parse_from([
            "promo",
            "generate",
            "--product",
            "Running Shoe X",
            "--price",
            "89,000",
            "--start",
            "2025-01-20",
            "--audience",
            "ppomppu",
            "--emphasis",
            "coupon:20% coupon",
            "--emphasis",
            "free shipping",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Generate {
                start, emphasis, ..
            }) => {
                assert_eq!(start, NaiveDate::from_ymd_opt(2025, 1, 20));
                assert_eq!(emphasis.len(), 2);
                assert_eq!(emphasis[0].kind, EmphasisKind::Coupon);
                assert_eq!(emphasis[1].text, "free shipping");
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn kind_prefix_is_not_rendered() {
        let cli = Cli::try_parse_from([
            "promo",
            "generate",
            "--product",
            "Running Shoe X",
            "--price",
            "89,000",
            "--audience",
            "ppomppu",
            "--emphasis",
            "coupon:20% off",
        ])
        .unwrap();
        let Some(Commands::Generate { emphasis, .. }) = cli.command else {
            panic!("expected generate");
        };
        let fields = CampaignFields {
            product_name: "Running Shoe X".into(),
            price: "89,000".into(),
            audience: "ppomppu".into(),
            emphasis_items: emphasis,
            ..Default::default()
        };
        let batch = PromoService::default().generate_variants(&fields).unwrap();

        for variant in &batch.variants {
            assert!(variant.rendered_text.contains("\n• 20% off"), "{}", variant.rendered_text);
            assert!(!variant.rendered_text.contains("coupon:"));
        }
    }

    #[test]
    fn rejects_malformed_date() {
        let result = Cli::try_parse_from([
            "promo",
            "generate",
            "--product",
            "P",
            "--price",
            "1",
            "--audience",
            "womad",
            "--start",
            "20/01/2025",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn text_output_lists_every_variant() {
        let fields = CampaignFields {
            product_name: "Running Shoe X".into(),
            price: "89,000".into(),
            audience: "ppomppu".into(),
            ..Default::default()
        };
        let batch = PromoService::default().generate_variants(&fields).unwrap();
        let text = format_batch(&batch);

        assert!(text.starts_with("Running Shoe X • 뽐뿌\n"));
        assert!(text.contains("버전 1 친근한 톤"));
        assert!(text.contains("버전 4 유머러스한 톤"));
        assert!(text.contains("예상 반응도: 90%"));
    }
}
