use clap::{Arg, Command};
use lingotype::lang::api_lang_code;
use lingotype::segmenter::segment;
use lingotype::session::sample_document;
use lingotype_mt::{MockMode, MockTranslator, MyMemoryProvider, Translator, offline_fallback};
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("lingotype-mt")
        .version("0.1.0")
        .about("Translation and segmentation CLI for lingotype")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required_unless_present_any(["file", "sample"])
                .index(1),
        )
        .arg(
            Arg::new("target-lang")
                .help("Target language tag (e.g. zh-TW, fr-FR)")
                .default_value("zh-TW")
                .index(2),
        )
        .arg(
            Arg::new("source-lang")
                .long("source")
                .short('s')
                .help("Source language tag (default: en-US)")
                .default_value("en-US"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .help("Read the text from a file instead of the argument")
                .conflicts_with("text"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .help("Write the multi-script sample practice document to a file and exit"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .short('t')
                .help("Print the token table for the text")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the mock translator instead of the MyMemory service")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show detailed processing steps")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // Sample download: write the fixed demonstration document and stop.
    if let Some(path) = matches.get_one::<String>("sample") {
        fs::write(path, sample_document())?;
        println!("📄 Wrote sample practice document to {}", path);
        return Ok(());
    }

    let text = match matches.get_one::<String>("file") {
        Some(path) => fs::read_to_string(path)?,
        None => matches.get_one::<String>("text").unwrap().clone(),
    };
    let source_lang = matches.get_one::<String>("source-lang").unwrap();
    let target_lang = matches.get_one::<String>("target-lang").unwrap();
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    if verbose {
        println!("📝 Source: \"{}\"", text.trim_end());
        println!(
            "🌍 {} → {} (API pair {}|{})",
            source_lang,
            target_lang,
            api_lang_code(source_lang),
            api_lang_code(target_lang)
        );
        println!();
    }

    if matches.get_flag("tokens") {
        let tokens = segment(&text, source_lang);
        println!("🔤 {} tokens:", tokens.len());
        for token in &tokens {
            let kind = if token.is_word { "word" } else { "    " };
            let wide = if token.is_wide_script { " wide" } else { "" };
            println!(
                "   [{:>4}..{:<4}] {} {:?}{}",
                token.start, token.end, kind, token.text, wide
            );
        }
        println!();
    }

    let translated = if use_mock {
        let mock = MockTranslator::new(MockMode::Suffix);
        mock.translate(&text, source_lang, target_lang).await?
    } else {
        let provider = MyMemoryProvider::new()?;
        match provider.translate(&text, source_lang, target_lang).await {
            Ok(result) => result,
            Err(e) => {
                eprintln!("⚠️  Translation service unavailable ({}), using offline fallback", e);
                offline_fallback(&text, target_lang)
            }
        }
    };

    println!("{}", translated);
    Ok(())
}
