use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::application::SummarizeUseCase;
use crate::domain::error::AppError;
use crate::domain::report::SummaryReport;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::response::{render_summary_card, PLACEHOLDER_HTML};

// Logs can be chatty; leave generous headroom for the raw upload body.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct HttpState {
    pub summarize_use_case: SummarizeUseCase,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeQuery {
    #[serde(default)]
    pub filename: Option<String>,
}

fn error_response(err: &AppError) -> HttpResponse {
    match err {
        AppError::ValidationError(_) => HttpResponse::BadRequest().body(err.to_string()),
        AppError::LLMError(_) => HttpResponse::BadGateway().body(err.to_string()),
        _ => HttpResponse::InternalServerError().body(err.to_string()),
    }
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[post("/summarize")]
async fn summarize(
    data: web::Data<HttpState>,
    query: web::Query<SummarizeQuery>,
    body: web::Bytes,
) -> impl Responder {
    if body.is_empty() {
        debug!("No file uploaded, serving placeholder");
        return HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(PLACEHOLDER_HTML);
    }

    if let Some(name) = query.filename.as_deref() {
        if !name.to_ascii_lowercase().ends_with(".txt") {
            let err = AppError::ValidationError(format!("`{}` is not a .txt file", name));
            return error_response(&err);
        }
    }

    let log_text = match String::from_utf8(body.to_vec()) {
        Ok(text) => text,
        Err(e) => {
            let err = AppError::ValidationError(format!("Upload is not valid UTF-8: {}", e));
            return error_response(&err);
        }
    };

    info!(
        filename = query.filename.as_deref().unwrap_or("<unnamed>"),
        bytes = log_text.len(),
        "Analyzing uploaded log"
    );

    let summary = match data.summarize_use_case.execute(&log_text).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Log summarization failed");
            return error_response(&e);
        }
    };

    // Computed for diagnostics only; the rendered card carries the full text.
    let report = SummaryReport::from_summary(&summary);
    debug!(?report, "Extracted summary fields");

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_summary_card(&summary))
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

pub fn start_server(config: &AppConfig, summarize_use_case: SummarizeUseCase) -> std::io::Result<Server> {
    let state = web::Data::new(HttpState { summarize_use_case });

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .app_data(web::PayloadConfig::new(MAX_UPLOAD_BYTES))
            .service(index)
            .service(web::scope("/api").service(summarize).service(health))
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI Log Analyzer</title>
    <style>
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Inter', -apple-system, sans-serif;
            background: #f3f4f6;
            color: #111827;
            min-height: 100vh;
            padding: 40px 20px;
        }
        .container { max-width: 760px; margin: 0 auto; }
        h1 { font-size: 1.6rem; margin-bottom: 8px; }
        .subtitle { color: #6b7280; margin-bottom: 24px; }
        .upload-card {
            background: white;
            border: 1px solid #e5e7eb;
            border-radius: 12px;
            padding: 24px;
            margin-bottom: 24px;
        }
        input[type="file"] { margin-bottom: 12px; display: block; }
        button {
            background: #2563eb;
            color: white;
            border: none;
            padding: 10px 24px;
            border-radius: 8px;
            font-size: 0.95rem;
            cursor: pointer;
        }
        button:hover { opacity: 0.9; }
        button:disabled { opacity: 0.5; cursor: not-allowed; }
        #spinner { display: none; color: #6b7280; margin-top: 12px; }
        #result { margin-top: 8px; }
        #result h3 { margin-bottom: 12px; }
        .error {
            background: #fef2f2;
            border: 1px solid #fecaca;
            border-radius: 8px;
            padding: 16px;
            color: #991b1b;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>&#x1F9E0; AI Log Analyzer</h1>
        <p class="subtitle">Upload a <b>.txt log file</b> below to know about the test failure.</p>
        <div class="upload-card">
            <input type="file" id="logfile" accept=".txt">
            <button id="analyze">&#x1F4C2; Analyze log file</button>
            <div id="spinner">&#x1F50D; Analyzing log file...</div>
        </div>
        <div id="result"></div>
    </div>
    <script>
        const fileInput = document.getElementById('logfile');
        const button = document.getElementById('analyze');
        const spinner = document.getElementById('spinner');
        const result = document.getElementById('result');

        async function analyze() {
            const file = fileInput.files[0];
            const url = file
                ? '/api/summarize?filename=' + encodeURIComponent(file.name)
                : '/api/summarize';
            button.disabled = true;
            spinner.style.display = 'block';
            result.innerHTML = '';
            try {
                const resp = await fetch(url, {
                    method: 'POST',
                    headers: { 'Content-Type': 'text/plain' },
                    body: file ? file : ''
                });
                const text = await resp.text();
                if (resp.ok) {
                    result.innerHTML = text;
                } else {
                    result.innerHTML = '<div class="error"></div>';
                    result.firstChild.textContent = text;
                }
            } catch (e) {
                result.innerHTML = '<div class="error">Request failed: ' + e + '</div>';
            } finally {
                button.disabled = false;
                spinner.style.display = 'none';
            }
        }

        button.addEventListener('click', analyze);
        analyze();
    </script>
</body>
</html>
"##;
