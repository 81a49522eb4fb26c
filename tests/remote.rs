use jannahway::remote::RemoteContent;
use jannahway::Config;
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> RemoteContent {
    let config = Config {
        quran_api_url: server.uri(),
        prayer_api_url: server.uri(),
        http_timeout: Duration::from_secs(2),
        ..Config::default()
    };
    RemoteContent::new(&config).expect("client builds")
}

#[tokio::test]
async fn surah_list_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/surah"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "data": [
                {"number": 1, "name": "سُورَةُ ٱلْفَاتِحَةِ", "englishName": "Al-Faatiha",
                 "englishNameTranslation": "The Opening", "numberOfAyahs": 7, "revelationType": "Meccan"},
                {"number": 2, "name": "سورة البقرة", "englishName": "Al-Baqara",
                 "englishNameTranslation": "The Cow", "numberOfAyahs": 286, "revelationType": "Medinan"}
            ]
        })))
        .mount(&server)
        .await;

    let surahs = client_for(&server).surahs().await;
    assert_eq!(surahs.len(), 2);
    assert_eq!(surahs[1].english_name, "Al-Baqara");
    assert_eq!(surahs[1].number_of_ayahs, 286);
}

#[tokio::test]
async fn surah_pairs_arabic_with_translation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/surah/112/editions/quran-uthmani,en.asad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"number": 112, "name": "سورة الإخلاص", "englishName": "Al-Ikhlaas", "revelationType": "meccan",
                 "ayahs": [{"numberInSurah": 1, "text": "قُلْ هُوَ ٱللَّهُ أَحَدٌ"}]},
                {"number": 112, "name": "سورة الإخلاص", "englishName": "Al-Ikhlaas", "revelationType": "meccan",
                 "ayahs": [{"numberInSurah": 1, "text": "SAY: He is the One God"}]}
            ]
        })))
        .mount(&server)
        .await;

    let surah = client_for(&server).surah(112).await.expect("surah data");
    assert_eq!(surah.revelation_type, "Meccan");
    assert!(surah.show_basmala);
    assert_eq!(surah.bookmark_label, "Surah Al-Ikhlaas");
    assert!(surah.audio_url.ends_with("/112.mp3"));
    assert_eq!(surah.verses.len(), 1);
    assert_eq!(surah.verses[0].english, "SAY: He is the One God");
}

#[tokio::test]
async fn surah_server_error_is_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.surah(1).await.is_none());
    assert!(client.surahs().await.is_empty());
}

#[tokio::test]
async fn prayer_times_keep_the_five_daily_prayers_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timingsByCity"))
        .and(query_param("city", "Lahore"))
        .and(query_param("country", "Pakistan"))
        .and(query_param("method", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"timings": {
                "Isha": "19:40", "Sunrise": "06:10", "Fajr": "04:50", "Dhuhr": "12:05",
                "Asr": "15:30", "Maghrib": "18:15", "Midnight": "00:05"
            }}
        })))
        .mount(&server)
        .await;

    let times = client_for(&server)
        .prayer_times("Lahore", "Pakistan")
        .await
        .expect("prayer times");
    let prayers: Vec<_> = times.timings.iter().map(|t| t.prayer.as_str()).collect();
    assert_eq!(prayers, vec!["Fajr", "Dhuhr", "Asr", "Maghrib", "Isha"]);
    assert_eq!(times.timings[0].time, "04:50");
}

#[tokio::test]
async fn malformed_prayer_response_is_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/timingsByCity"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert!(client_for(&server).prayer_times("Nowhere", "UK").await.is_none());
}
