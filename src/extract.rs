use itertools::Itertools;
use log::debug;
use rand::{
    Rng,
    seq::SliceRandom,
};
use scraper::{
    ElementRef,
    Html,
    Selector,
};

use crate::error::PipelineError;

const TABLE_SELECTOR: &str = "table.wikitable";
const ROW_SELECTOR: &str = "tr";

/// The raw text fields of one sampled table row.
///
/// Field 0 holds the date text, field 1 the comma-separated predictors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PredictionRecord(Vec<String>);

impl PredictionRecord {
    /// Splits row text on line breaks, dropping blank lines and citation markers.
    pub fn from_text(text: &str) -> Result<PredictionRecord, PipelineError> {
        let fields = text.lines()
            .filter(|line| !line.trim().is_empty())
            .filter(|line| !line.starts_with('['))
            .map(str::to_owned)
            .collect::<Vec<_>>();

        PredictionRecord::new(fields)
    }

    pub fn new(fields: Vec<String>) -> Result<PredictionRecord, PipelineError> {
        if fields.len() < 2 {
            return Err(PipelineError::MalformedRecord(fields));
        }

        Ok(PredictionRecord(fields))
    }

    #[inline]
    pub fn date(&self) -> &str {
        &self.0[0]
    }

    #[inline]
    pub fn predictors(&self) -> &str {
        &self.0[1]
    }

    #[inline]
    pub fn fields(&self) -> &[String] {
        &self.0
    }
}

fn selector(s: &'static str) -> Result<Selector, PipelineError> {
    Selector::parse(s).map_err(|_| PipelineError::Selector(s.to_owned()))
}

/// Samples one prediction row from the document.
///
/// The last data table on the page is never sampled; on the source page it
/// holds open-ended far-future entries. This is positional and will silently
/// sample the wrong table if the page layout changes.
pub fn extract<R: Rng + ?Sized>(html: &str, rng: &mut R) -> Result<PredictionRecord, PipelineError> {
    let document = Html::parse_document(html);

    let table_selector = selector(TABLE_SELECTOR)?;
    let row_selector = selector(ROW_SELECTOR)?;

    let tables = document.select(&table_selector).collect::<Vec<ElementRef>>();
    debug!("found {} data tables", tables.len());

    if tables.len() < 2 {
        return Err(PipelineError::NoTableAvailable(tables.len()));
    }

    let table = tables[..tables.len() - 1].choose(rng)
        .ok_or(PipelineError::NoTableAvailable(tables.len()))?;

    let rows = table.select(&row_selector).collect::<Vec<ElementRef>>();
    debug!("selected table has {} rows", rows.len());

    if rows.len() < 2 {
        return Err(PipelineError::NoRowAvailable(rows.len()));
    }

    let row = rows[1..].choose(rng)
        .ok_or(PipelineError::NoRowAvailable(rows.len()))?;

    let text = row.text().collect::<String>();
    let record = PredictionRecord::from_text(&text)?;

    debug!("extracted record: {}", record.fields().iter().join(" | "));

    Ok(record)
}
