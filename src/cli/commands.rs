//! Command implementations for the lexisearch CLI.

use log::info;

use crate::cli::args::*;
use crate::corpus;
use crate::error::Result;
use crate::extract::FeatureExtractor;
use crate::index::{IndexBuilder, IndexVariant};
use crate::lexical::cache::CachedResource;
use crate::lexical::dictionary::DictionaryResource;
use crate::parse::corenlp::CoreNlpParser;
use crate::query::QueryProcessor;
use crate::search::solr::SolrClient;
use crate::search::{SearchClient, resolve_hits};

/// Execute a CLI command.
pub fn execute_command(args: LexisearchArgs) -> Result<()> {
    match &args.command {
        Command::Index(index_args) => index_corpus(index_args),
        Command::Search(search_args) => search_corpus(search_args),
    }
}

/// Segment, extract, build, and ingest one collection from scratch.
fn index_corpus(args: &IndexArgs) -> Result<()> {
    let pipeline = &args.pipeline;
    let corpus = corpus::segment(&pipeline.corpus)?;
    info!(
        "corpus: {} articles, {} sentence units, {} words",
        corpus.article_count,
        corpus.len(),
        corpus.word_count
    );

    let variant = pipeline.variant.index_variant();
    let records = match variant.extraction() {
        None => IndexBuilder::build_words_only(&corpus.units),
        Some(extraction) => {
            let resource = CachedResource::new(DictionaryResource::from_file(&pipeline.resource)?);
            let parser = CoreNlpParser::new(pipeline.parser_url.clone());
            let extractor = FeatureExtractor::new(&resource, &parser);
            let bundles = extractor.extract_all(&corpus.units, extraction)?;
            IndexBuilder::build(&corpus.units, &bundles)?
        }
    };

    let client = SolrClient::new(pipeline.engine.clone());
    IndexBuilder::ingest(&client, variant, &records)
}

/// Run one query against a built collection and print ranked sentences.
fn search_corpus(args: &SearchArgs) -> Result<()> {
    let pipeline = &args.pipeline;
    let corpus = corpus::segment(&pipeline.corpus)?;
    let variant = pipeline.variant.index_variant();

    let resource = CachedResource::new(DictionaryResource::from_file(&pipeline.resource)?);
    let parser = CoreNlpParser::new(pipeline.parser_url.clone());
    let processor = QueryProcessor::new(&resource, &parser);

    let query = match variant {
        IndexVariant::WordsOnly => processor.words_query(&args.query),
        IndexVariant::MultiFeature | IndexVariant::MultiFeatureDisambiguated => {
            // extraction() is always Some for the feature profiles
            let extraction = variant.extraction().ok_or_else(|| {
                crate::error::LexisearchError::query("feature profile without extraction variant")
            })?;
            processor.feature_query(&args.query, extraction)?
        }
    };
    println!("Query: {query}");

    let client = SolrClient::new(pipeline.engine.clone());
    let hits = client.search(variant.collection(), &query)?;

    println!();
    println!("Top {} documents that closely match the query", hits.len());
    for (id, sentence) in resolve_hits(&hits, &corpus) {
        println!("{id:<10} {sentence}");
    }
    Ok(())
}
