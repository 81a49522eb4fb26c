//! Clients for the Quran text API and the prayer timings API.
//!
//! Neither ever returns an error to the caller: a failed request, a non-2xx
//! status or an unexpected body is logged and reported as no data.

use crate::config::Config;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

const QURAN_EDITIONS: &str = "quran-uthmani,en.asad";
const RECITATION_AUDIO: &str = "https://server8.mp3quran.net/afs";
pub const DAILY_PRAYERS: [&str; 5] = ["Fajr", "Dhuhr", "Asr", "Maghrib", "Isha"];

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahSummary {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    #[serde(default)]
    pub english_name_translation: String,
    #[serde(default)]
    pub number_of_ayahs: u16,
    #[serde(default)]
    pub revelation_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Edition {
    name: String,
    english_name: String,
    #[serde(default)]
    revelation_type: String,
    ayahs: Vec<Ayah>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Ayah {
    number_in_surah: u16,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub number: u16,
    pub arabic: String,
    pub english: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Surah {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    pub revelation_type: String,
    /// Every surah but Al-Fatiha and At-Tawbah opens with the basmala.
    pub show_basmala: bool,
    pub audio_url: String,
    pub bookmark_label: String,
    pub verses: Vec<Verse>,
}

#[derive(Debug, Deserialize)]
struct Timings {
    timings: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerTime {
    pub prayer: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerTimes {
    pub city: String,
    pub country: String,
    pub timings: Vec<PrayerTime>,
}

#[derive(Clone)]
pub struct RemoteContent {
    client: Client,
    quran_api_url: String,
    prayer_api_url: String,
    prayer_method: u8,
}

impl RemoteContent {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.http_timeout).build()?;
        Ok(Self {
            client,
            quran_api_url: config.quran_api_url.clone(),
            prayer_api_url: config.prayer_api_url.clone(),
            prayer_method: config.prayer_method,
        })
    }

    pub async fn surahs(&self) -> Vec<SurahSummary> {
        let url = format!("{}/surah", self.quran_api_url);
        self.fetch::<Vec<SurahSummary>>(&url, &[])
            .await
            .unwrap_or_default()
    }

    pub async fn surah(&self, number: u16) -> Option<Surah> {
        let url = format!("{}/surah/{number}/editions/{QURAN_EDITIONS}", self.quran_api_url);
        let editions = self.fetch::<Vec<Edition>>(&url, &[]).await?;
        let mut editions = editions.into_iter();
        let (Some(arabic), Some(english)) = (editions.next(), editions.next()) else {
            warn!(number, "surah response is missing an edition");
            return None;
        };

        let verses = arabic
            .ayahs
            .into_iter()
            .zip(english.ayahs)
            .map(|(original, translated)| Verse {
                number: original.number_in_surah,
                arabic: original.text,
                english: translated.text,
            })
            .collect();

        Some(Surah {
            number,
            bookmark_label: format!("Surah {}", arabic.english_name),
            name: arabic.name,
            english_name: arabic.english_name,
            revelation_type: capitalize(&arabic.revelation_type),
            show_basmala: number != 1 && number != 9,
            audio_url: format!("{RECITATION_AUDIO}/{number:03}.mp3"),
            verses,
        })
    }

    pub async fn prayer_times(&self, city: &str, country: &str) -> Option<PrayerTimes> {
        let url = format!("{}/timingsByCity", self.prayer_api_url);
        let method = self.prayer_method.to_string();
        let query = [("city", city), ("country", country), ("method", method.as_str())];
        let Timings { mut timings } = self.fetch::<Timings>(&url, &query).await?;

        let timings: Vec<PrayerTime> = DAILY_PRAYERS
            .iter()
            .filter_map(|&prayer| {
                timings.remove(prayer).map(|time| PrayerTime {
                    prayer: prayer.to_string(),
                    time,
                })
            })
            .collect();
        if timings.is_empty() {
            warn!(city, country, "prayer timings response has no daily prayers");
            return None;
        }

        Some(PrayerTimes {
            city: city.to_string(),
            country: country.to_string(),
            timings,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Option<T> {
        let response = match self.client.get(url).query(query).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("request to {url} failed: {err}");
                return None;
            }
        };
        if !response.status().is_success() {
            warn!("request to {url} returned {}", response.status());
            return None;
        }
        match response.json::<Envelope<T>>().await {
            Ok(envelope) => Some(envelope.data),
            Err(err) => {
                warn!("failed to parse response from {url}: {err}");
                None
            }
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
