use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::canonical::CanonicalCodes;
use crate::compressed_data::{CompressedData, EncodeSummary};
use crate::config::AlphabetConfig;
use crate::content::encode_content;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::header::{header_width, write_header};
use crate::hufftree::HuffmanTree;

/// Extension appended to the input path to name the encoded file.
pub const COMPRESSED_EXTENSION: &str = "hf";

/// Frequencies and the canonical code table derived from them.
#[derive(Debug, Clone)]
pub struct CodePlan {
    pub frequencies: FrequencyTable,
    pub codes: CanonicalCodes,
}

/// Drives the two-pass encoding pipeline over one input.
#[derive(Debug, Clone, Default)]
pub struct HuffmanCodec {
    config: AlphabetConfig,
}

impl HuffmanCodec {
    pub fn new(config: AlphabetConfig) -> Result<Self> {
        config.validate()?;
        Ok(HuffmanCodec { config })
    }

    pub fn config(&self) -> &AlphabetConfig {
        &self.config
    }

    /// First pass: counts symbols and derives the canonical codes.
    pub fn plan<R: BufRead>(&self, input: &mut R) -> Result<CodePlan> {
        let frequencies = FrequencyTable::extract(input, &self.config)?;
        let tree = HuffmanTree::from_frequencies(&frequencies)?;
        let raw_codes = tree.raw_codes();
        let codes = CanonicalCodes::from_sorted(&raw_codes, self.config.alphabet_size);

        debug!(
            distinct = raw_codes.len(),
            max_length = codes.max_length(),
            "derived canonical codes"
        );
        Ok(CodePlan { frequencies, codes })
    }

    /// Second pass: rewinds `input` and writes header then content.
    pub fn write_encoded<R, W>(
        &self,
        plan: &CodePlan,
        input: &mut R,
        mut output: W,
    ) -> Result<EncodeSummary>
    where
        R: BufRead + Seek,
        W: Write,
    {
        input.seek(SeekFrom::Start(0))?;

        let header_bytes = write_header(&plan.codes, &self.config, &mut output)?;
        let (input_symbols, content_bytes) =
            encode_content(input, &plan.codes, &self.config, &mut output)?;
        output.flush()?;

        Ok(EncodeSummary {
            input_symbols,
            distinct_symbols: plan.frequencies.distinct(),
            max_code_length: plan.codes.max_length(),
            width: header_width(plan.codes.max_length()),
            header_bytes,
            content_bytes,
        })
    }

    pub fn encode<R, W>(&self, input: &mut R, output: W) -> Result<EncodeSummary>
    where
        R: BufRead + Seek,
        W: Write,
    {
        let plan = self.plan(input)?;
        self.write_encoded(&plan, input, output)
    }

    /// Encodes an in-memory buffer, keeping the two segments apart.
    pub fn encode_bytes(&self, data: &[u8]) -> Result<CompressedData> {
        let mut input = Cursor::new(data);
        let plan = self.plan(&mut input)?;
        input.set_position(0);

        let mut header = Vec::new();
        write_header(&plan.codes, &self.config, &mut header)?;
        let mut content = Vec::new();
        encode_content(&mut input, &plan.codes, &self.config, &mut content)?;

        Ok(CompressedData { header, content })
    }

    /// Encodes the file at `path` into `<path>.hf`.
    ///
    /// The output file is only created once the first pass has succeeded, so
    /// an input with unsupported symbols leaves nothing behind.
    pub fn encode_file(&self, path: &Path) -> Result<(PathBuf, EncodeSummary)> {
        let mut input = BufReader::new(File::open(path)?);
        let plan = self.plan(&mut input)?;

        let output_path = compressed_path(path);
        let mut output = BufWriter::new(File::create(&output_path)?);
        let summary = self.write_encoded(&plan, &mut input, &mut output)?;
        output.flush()?;

        debug!(
            input = %path.display(),
            output = %output_path.display(),
            bytes = summary.total_bytes(),
            "encoded file"
        );
        Ok((output_path, summary))
    }
}

/// The sibling path an encoded `path` is written to.
pub fn compressed_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(COMPRESSED_EXTENSION);
    PathBuf::from(name)
}
