use fnv::FnvHashSet;
use lazy_static::lazy_static;
use log::{debug, trace};
use rand::{
    Rng,
    seq::SliceRandom,
};
use regex::Regex;

use crate::{
    error::PipelineError,
    extract::PredictionRecord,
};

/// Upper bound on predictor redraws before giving up on rejection sampling.
const MAX_REDRAWS: usize = 64;

lazy_static! {
    static ref YEAR_REGEX: Regex = Regex::new(r"[0-9]{2,4}").expect("unable to compile year regex");

    /// Names the bot refuses to mock.
    pub static ref PROTECTED_WORDS: FnvHashSet<&'static str> = [
        "Jesus", "Christ", "God", "Allah", "Jehovah", "Yahweh", "Buddha", "Muhammad",
        "Talmud", "Torah", "Quran", "Bible", "Koran",
        "Judaism", "Christianity", "Muslim", "Christian", "Jew", "Islam", "Jewish",
        "Catholic", "Protestant", "Hindu", "Hinduism", "Buddhism", "Buddhist",
        "Sikh", "Sikhism", "Shinto", "Shintoism", "Confucianism", "Confucian",
        "Taoism", "Taoist", "Zoroastrianism", "Zoroastrian", "Jainism", "Jain",
        "Bahai", "Bahaiism", "Bahaii", "Bahaiiism",
        "Atheism", "Atheist", "Agnostic", "Agnosticism", "Deism", "Deist",
        "Pagan", "Paganism", "Wicca", "Wiccan",
        "Jehovahs", "Jehovah's", "Jehovahs'",
        "Christians", "Jews", "Muslims", "Catholics", "Protestants", "Hindus",
        "Buddhists", "Sikhs", "Shintos", "Confucians", "Taoists", "Zoroastrians",
        "Jains", "Bahais", "Atheists",
    ].iter().cloned().collect();
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructuredPrediction {
    pub year: i32,
    pub is_past: bool,
    pub predictor: String,
}

#[inline]
pub fn is_protected(name: &str) -> bool {
    PROTECTED_WORDS.contains(name.trim())
}

#[inline]
fn eligible(name: &str) -> bool {
    !name.trim().is_empty() && !is_protected(name)
}

/// The last 2-4 digit run in the date text; for a range that is its later bound.
pub fn parse_year(date: &str) -> Result<i32, PipelineError> {
    YEAR_REGEX.find_iter(date)
        .last()
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .ok_or_else(|| PipelineError::NoYearFound(date.to_owned()))
}

/// Draws a predictor uniformly, redrawing while the draw is protected.
pub fn choose_predictor<R: Rng + ?Sized>(predictors: &str, rng: &mut R) -> Result<String, PipelineError> {
    let candidates = predictors.split(',').collect::<Vec<_>>();

    if !candidates.iter().any(|c| eligible(c)) {
        return Err(PipelineError::AllCandidatesProtected(
            candidates.iter().map(|c| c.trim().to_owned()).collect()
        ));
    }

    for _ in 0..MAX_REDRAWS {
        match candidates.choose(rng) {
            Some(c) if eligible(c) => return Ok(c.trim().to_owned()),
            Some(c) => trace!("redrawing protected predictor '{}'", c.trim()),
            None => break,
        }
    }

    // unlucky streak; draw from the eligible names directly
    candidates.iter()
        .filter(|c| eligible(c))
        .collect::<Vec<_>>()
        .choose(rng)
        .map(|c| c.trim().to_owned())
        .ok_or_else(|| PipelineError::AllCandidatesProtected(vec![]))
}

pub fn interpret<R: Rng + ?Sized>(
    record: &PredictionRecord,
    current_year: i32,
    rng: &mut R,
) -> Result<StructuredPrediction, PipelineError> {
    let year = parse_year(record.date())?;
    let predictor = choose_predictor(record.predictors(), rng)?;

    let prediction = StructuredPrediction {
        year,
        is_past: year < current_year,
        predictor,
    };

    debug!("interpreted prediction: {:?}", prediction);

    Ok(prediction)
}
