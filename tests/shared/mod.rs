#![allow(dead_code)]

use grammr::{
    feature::{Feature, CASE, NUMBER},
    inflection::Inflection,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

pub(crate) const ANALYSIS: &str = r#"{
    "sourcePhrase": "wie geht es dir?",
    "semanticTranslation": {
        "sourcePhrase": "wie geht es dir?",
        "translatedPhrase": "Как дела?"
    },
    "analyzedTokens": [
        {
            "text": "Как",
            "translation": {"source": "как", "translation": "wie"},
            "morphology": {"text": "Как", "lemma": "как", "features": [], "pos": "SCONJ"}
        },
        {
            "text": "дела",
            "translation": {"source": "дела", "translation": "Wie geht's?"},
            "morphology": {
                "text": "дела",
                "lemma": "дело",
                "pos": "NOUN",
                "features": [
                    {"type": "ANIMACY", "value": "INAN", "enumValue": "INAN"},
                    {"type": "CASE", "value": "NOM", "enumValue": "NOM"},
                    {"type": "GENDER", "value": "NEUT", "enumValue": "NEUT"},
                    {"type": "NUMBER", "value": "PLUR", "enumValue": "PLUR"}
                ]
            }
        }
    ]
}"#;

pub(crate) const INFLECTIONS: &str = r#"{
    "lemma": "Haus",
    "partOfSpeech": "NOUN",
    "inflections": [
        {"lemma": "Haus", "inflected": "Haus", "features": [
            {"type": "CASE", "value": "NOM", "fullIdentifier": "Nominative"},
            {"type": "NUMBER", "value": "SING", "fullIdentifier": "Singular"}
        ]},
        {"lemma": "Haus", "inflected": "Häuser", "features": [
            {"type": "CASE", "value": "NOM", "fullIdentifier": "Nominative"},
            {"type": "NUMBER", "value": "PLUR", "fullIdentifier": "Plural"}
        ]},
        {"lemma": "Haus", "inflected": "Hauses", "features": [
            {"type": "CASE", "value": "GEN", "fullIdentifier": "Genitive"},
            {"type": "NUMBER", "value": "SING", "fullIdentifier": "Singular"}
        ]}
    ]
}"#;

pub(crate) fn haus_inflections() -> Vec<Inflection> {
    [("Haus", "NOM", "SING"), ("Häuser", "NOM", "PLUR"), ("Hauses", "GEN", "SING")]
        .iter()
        .map(|(inflected, case, number)| Inflection {
            lemma: "Haus".to_string(),
            inflected: inflected.to_string(),
            features: vec![Feature::new(CASE, *case), Feature::new(NUMBER, *number)],
        })
        .collect::<Vec<_>>()
}

/// Accepts one connection, answers it with `status` and `body`, and yields
/// the raw request it received.
pub(crate) async fn serve_once(status: u16, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let host = format!("http://{}", listener.local_addr().unwrap());
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let reason = match status {
            200 => "OK",
            404 => "Not Found",
            _ => "Bad Gateway",
        };
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;

        request
    });

    (host, handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let read = socket.read(&mut chunk).await.unwrap();
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);

        if let Some(end) = buffer.windows(4).position(|window| window == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buffer[..end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if buffer.len() >= end + 4 + length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buffer).into_owned()
}
