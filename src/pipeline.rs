use std::path::Path;
use tokio::fs;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, WordsieveError};
use crate::extract::{read_source_text, SourceFormat};
use crate::filter::{load_dictionary, CandidateFilter};
use crate::output::{write_unfiltered_export, write_word_lines, write_word_list};
use crate::postfilter::PostFilter;
use crate::refsets::ReferenceSets;
use crate::tokenize::extract_unique_words;
use crate::translate::{translate_batch, OllamaTranslator, Translation, WordTranslator};
use crate::wordlist::{load_known_words, WordlistFormat};

pub struct Pipeline {
    config: Config,
    translator: Box<dyn WordTranslator>,
    refsets: ReferenceSets,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        let translator = Box::new(OllamaTranslator::new(config.translate.clone()));
        Self::with_translator(config, translator)
    }

    /// Construct with an explicit translator, the seam used by tests.
    pub fn with_translator(config: Config, translator: Box<dyn WordTranslator>) -> Self {
        Self {
            config,
            translator,
            refsets: ReferenceSets::builtin(),
        }
    }

    /// Run the full extract/filter/translate/exclude pipeline on one
    /// document and write the result spreadsheet.
    pub async fn process_file(
        &self,
        source_path: &Path,
        wordlist_path: &Path,
        output_path: &Path,
        export_unfiltered: bool,
    ) -> Result<()> {
        info!("Processing document: {}", source_path.display());

        if !source_path.exists() {
            return Err(WordsieveError::FileNotFound(
                source_path.display().to_string(),
            ));
        }

        // Resolve both formats up front so an unsupported file aborts the
        // run before any extraction or translation work
        SourceFormat::from_path(source_path)?;
        WordlistFormat::from_path(wordlist_path)?;

        let text = read_source_text(source_path, &self.config.source).await?;
        let words = extract_unique_words(&text);
        info!("Extracted {} unique words", words.len());

        let known = load_known_words(wordlist_path)?;
        info!("Known-word list contains {} entries", known.len());

        let dictionary = match &self.config.filter.dictionary_path {
            Some(path) => Some(load_dictionary(Path::new(path))?),
            None => None,
        };

        let filter = CandidateFilter::new(known, dictionary);
        let unfamiliar = filter.filter(&words);
        info!("{} unfamiliar words left after filtering", unfamiliar.len());

        self.translator.check_availability().await?;
        let translations = translate_batch(self.translator.as_ref(), &unfamiliar).await;
        let pairs: Vec<(String, Translation)> =
            unfamiliar.into_iter().zip(translations).collect();

        if export_unfiltered {
            let export_path = write_unfiltered_export(&pairs, output_path)?;
            info!("Unfiltered word list exported to {}", export_path.display());
        }

        let post_filter = PostFilter::new(&self.config.exclusion, &self.refsets);
        let result = post_filter.apply(pairs);

        write_word_list(&result, output_path)?;
        Ok(())
    }

    /// Process every supported document in a directory, one result
    /// spreadsheet per input. Per-file failures are logged and skipped.
    pub async fn process_directory(
        &self,
        input_dir: &Path,
        wordlist_path: &Path,
        output_dir: Option<&Path>,
        export_unfiltered: bool,
    ) -> Result<()> {
        info!("Processing directory: {}", input_dir.display());

        if !input_dir.is_dir() {
            return Err(WordsieveError::Config(
                "Input path is not a directory".to_string(),
            ));
        }

        let output_dir = output_dir.unwrap_or(input_dir).to_path_buf();
        fs::create_dir_all(&output_dir).await?;

        let mut source_files = Vec::new();
        for entry in WalkDir::new(input_dir).into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file()
                && SourceFormat::from_path(entry.path()).is_ok()
            {
                source_files.push(entry.path().to_path_buf());
            }
        }

        info!("Found {} documents to process", source_files.len());

        for source_path in source_files {
            let stem = source_path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "result".to_string());
            // Suffixed so a tabular source never collides with its own output
            let output_path = output_dir.join(format!("{}_words.csv", stem));

            match self
                .process_file(&source_path, wordlist_path, &output_path, export_unfiltered)
                .await
            {
                Ok(_) => info!("Successfully processed: {}", source_path.display()),
                Err(e) => warn!("Failed to process {}: {}", source_path.display(), e),
            }
        }

        Ok(())
    }

    /// Extract the unique word list from a document without translating.
    pub async fn extract_words(&self, source_path: &Path, output_path: &Path) -> Result<()> {
        if !source_path.exists() {
            return Err(WordsieveError::FileNotFound(
                source_path.display().to_string(),
            ));
        }

        let text = read_source_text(source_path, &self.config.source).await?;
        let words = extract_unique_words(&text);
        info!("Extracted {} unique words", words.len());

        write_word_lines(&words, output_path)
    }

    /// Translate a line-oriented word list file into a result spreadsheet.
    /// The exclusion rules are not applied; this is the translation stage
    /// alone.
    pub async fn translate_wordlist(&self, input_path: &Path, output_path: &Path) -> Result<()> {
        if !input_path.exists() {
            return Err(WordsieveError::FileNotFound(
                input_path.display().to_string(),
            ));
        }

        let content = fs::read_to_string(input_path).await?;
        let words = extract_unique_words(&content);
        info!("Translating {} words from {}", words.len(), input_path.display());

        self.translator.check_availability().await?;
        let translations = translate_batch(self.translator.as_ref(), &words).await;
        let pairs: Vec<(String, Translation)> = words.into_iter().zip(translations).collect();

        write_word_list(&pairs, output_path)
    }
}
