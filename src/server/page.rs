//! HTML for the index and not-found pages.

use std::fmt::Write as _;

use crate::{
    catalog::Catalogs,
    pipeline::{PipelineStatus, StageStatus},
};

const SCRIPT: &str = r#"
const POLL_INTERVAL_MS = 3000;

document.getElementById('pipeline-form').addEventListener('submit', async (e) => {
    e.preventDefault();
    const categories = Array.from(document.querySelectorAll('.category-checkbox:checked')).map(cb => cb.value);
    const message = document.getElementById('message');
    if (categories.length === 0) {
        message.textContent = 'Please select at least one ranking category.';
        return;
    }
    message.textContent = 'Running pipeline...';
    const poller = setInterval(refresh, POLL_INTERVAL_MS);
    try {
        const response = await fetch('/api/run_pipeline', {
            method: 'POST',
            headers: {'Content-Type': 'application/json'},
            body: JSON.stringify({categories, audio_mood: document.getElementById('audio-mood').value}),
        });
        const data = await response.json();
        message.textContent = data.message || data.error;
    } catch (err) {
        message.textContent = 'Request failed: ' + err;
    } finally {
        clearInterval(poller);
        refresh();
    }
});

async function refresh() {
    const status = await (await fetch('/api/status')).json();
    document.getElementById('data-collection-status').textContent = status.data_collection;
    document.getElementById('video-generation-status').textContent = status.video_generation;
    document.getElementById('last-run').textContent = status.last_run || 'Never';
    const list = document.getElementById('videos');
    list.innerHTML = '';
    for (const video of status.videos_generated) {
        const item = document.createElement('li');
        const link = document.createElement('a');
        link.href = video.url;
        link.textContent = `${video.category} (${video.audio_mood}, ${video.timestamp})`;
        item.appendChild(link);
        list.appendChild(item);
    }
}

window.addEventListener('load', refresh);
"#;

/// Escape text for HTML element and attribute content
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn stage_label(stage: StageStatus) -> &'static str {
    match stage {
        StageStatus::NotStarted => "not_started",
        StageStatus::InProgress => "in_progress",
        StageStatus::Completed => "completed",
        StageStatus::Failed => "failed",
    }
}

pub fn render_index(catalogs: &Catalogs, status: &PipelineStatus) -> String {
    let mut categories = String::new();
    for (section, names) in &catalogs.categories {
        let _ = writeln!(categories, "<fieldset><legend>{}</legend>", escape(section));
        for name in names {
            let name = escape(name);
            let _ = writeln!(
                categories,
                "<label><input type=\"checkbox\" class=\"category-checkbox\" value=\"{0}\"> {0}</label><br>",
                name
            );
        }
        categories.push_str("</fieldset>\n");
    }

    let mut moods = String::new();
    for (mood, tracks) in &catalogs.audio_tracks {
        let _ = writeln!(
            moods,
            "<option value=\"{}\" title=\"{}\">{}</option>",
            escape(&mood.to_lowercase()),
            escape(&tracks.join(", ")),
            escape(mood)
        );
    }

    let mut videos = String::new();
    for video in &status.videos_generated {
        let _ = writeln!(
            videos,
            "<li><a href=\"{}\">{} ({}, {})</a></li>",
            escape(&video.url),
            escape(&video.category),
            escape(&video.audio_mood),
            escape(&video.timestamp)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>College Rankings Video Generator</title>
<link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
<h1>College Rankings Video Generator</h1>
<section>
<h2>Pipeline Status</h2>
<p>Data collection: <span id="data-collection-status">{data_collection}</span></p>
<p>Video generation: <span id="video-generation-status">{video_generation}</span></p>
<p>Last run: <span id="last-run">{last_run}</span></p>
</section>
<form id="pipeline-form">
<h2>Ranking Categories</h2>
{categories}<h2>Audio Mood</h2>
<select id="audio-mood">
{moods}</select>
<button type="submit">Generate Videos</button>
</form>
<p id="message"></p>
<section>
<h2>Generated Videos</h2>
<ul id="videos">
{videos}</ul>
</section>
<script>{script}</script>
</body>
</html>
"#,
        data_collection = stage_label(status.data_collection),
        video_generation = stage_label(status.video_generation),
        last_run = escape(status.last_run.as_deref().unwrap_or("Never")),
        categories = categories,
        moods = moods,
        videos = videos,
        script = SCRIPT,
    )
}

pub fn render_not_found() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>404 - Page Not Found</title>
</head>
<body>
<h1>404 - Page Not Found</h1>
<p>The page you are looking for does not exist.</p>
<p><a href="/">Return to Home</a></p>
</body>
</html>
"#
    .to_string()
}
