use log::debug;
use rand::{
    Rng,
    seq::SliceRandom,
};

use crate::interpret::StructuredPrediction;

/// Placeholders: `{predictor}`, `{year}`, `{elapsed}` (current year minus year),
/// `{remaining}` (year minus current year), `{tag}` (predictor without spaces).
pub static PAST_TEMPLATES: &[&str] = &[
    "According to {predictor}, the world ended in {year}. #wewillrebuild",
    "{predictor} thought the world would end in {year}. #foolishmortal",
    "The world ended in {year}, according to {predictor}. #whoknew",
    "So, yeah, the world ended in {year}, {predictor}? #aboutthat...",
    "Solid prediction, {predictor}. The world ended in {year}. #eyeroll",
    "I'm pretty sure the world did not end in {year}, {predictor}. #mycondolences",
    "Only {elapsed} years since the world ended in {year}, according to {predictor}. #whatevershallwedo",
    "Oh no! The world ended in {year}, {predictor}? #thehumansaredead",
    "The world ended in {year}, according to {predictor}. #goodthing{tag}isanidiot",
];

pub static FUTURE_TEMPLATES: &[&str] = &[
    "According to {predictor}, the world will end in {year}. #yikes",
    "{predictor} thinks the world will end in {year}. #goodthing{tag}isanidiot",
    "The world will end in {year}, according to {predictor}. #washyourunderwear",
    "So, yeah, the world is supposed to end in {year}, {predictor}? #wanttobuyabridge",
    "Solid prediction, {predictor}. The world will TOTALLY end in {year}. #eyeroll",
    "I'm pretty sure the world will not end in {year}, {predictor}. #mycondolences",
    "Only {remaining} years until the world ends in {year}, according to {predictor}. #eatthatextrapieceofcake",
    "Oh no! The world will end in {year}, {predictor}? #whyareyouthewayyouare",
];

#[inline]
pub fn templates(is_past: bool) -> &'static [&'static str] {
    if is_past {
        PAST_TEMPLATES
    } else {
        FUTURE_TEMPLATES
    }
}

pub fn render(template: &str, prediction: &StructuredPrediction, current_year: i32) -> String {
    let tag = prediction.predictor.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();

    template
        .replace("{predictor}", &prediction.predictor)
        .replace("{year}", &prediction.year.to_string())
        .replace("{elapsed}", &(current_year - prediction.year).to_string())
        .replace("{remaining}", &(prediction.year - current_year).to_string())
        .replace("{tag}", &tag)
}

/// Renders a random template from the collection matching the prediction's tense.
///
/// The result is not checked against any platform length limit.
pub fn compose<R: Rng + ?Sized>(prediction: &StructuredPrediction, current_year: i32, rng: &mut R) -> String {
    let collection = templates(prediction.is_past);

    // both collections are non-empty
    let template = collection.choose(rng).unwrap_or(&collection[0]);
    debug!("selected template: {}", template);

    render(template, prediction, current_year)
}
