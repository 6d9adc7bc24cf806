//! Gabarits HTML embarqués de la page de statut.
//! La feuille de style est servie séparément depuis static/.

use crate::http::StatusView;

/// Échappe une chaîne pour insertion dans du HTML.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Page de statut complète, rendue depuis la vue courante.
pub fn render_index(view: &StatusView, join_command: &str) -> String {
    let neighborhood = html_escape(&view.neighborhood_id);
    let (badge_class, badge_label) = if view.online {
        ("badge online", "Online")
    } else {
        ("badge offline", "Offline")
    };

    // tri des conteneurs pour un affichage stable d'un rafraîchissement à l'autre
    let mut containers: Vec<(&String, &String)> = view.containers.iter().collect();
    containers.sort_by(|a, b| a.0.cmp(b.0));
    let container_rows: String = containers
        .iter()
        .map(|(name, status)| {
            format!(
                "<tr><td>{}</td><td class=\"status\">{}</td></tr>\n",
                html_escape(name),
                html_escape(status)
            )
        })
        .collect();

    let last_update = view
        .last_update
        .as_deref()
        .map(html_escape)
        .unwrap_or_else(|| "jamais".to_string());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>OurBlock - {neighborhood}</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body>
<div class="container">
<header>
<h1>OurBlock &mdash; {neighborhood}</h1>
<span class="{badge_class}">{badge_label}</span>
</header>
<section class="tiles">
<div class="tile"><span class="value">{uptime}</span><span class="label">uptime</span></div>
<div class="tile"><span class="value">{storage:.2} MB</span><span class="label">storage used</span></div>
<div class="tile"><span class="value">{peers}</span><span class="label">peers connected</span></div>
<div class="tile"><span class="value">{vouches}</span><span class="label">vouches processed</span></div>
</section>
<section>
<h2>Containers</h2>
<table class="containers">
{container_rows}</table>
</section>
<section>
<h2>Join this neighborhood</h2>
<pre class="join">{join_command}</pre>
</section>
<footer>last update: {last_update}</footer>
</div>
</body>
</html>
"#,
        uptime = html_escape(&view.uptime_formatted),
        storage = view.storage_used_mb,
        peers = view.peers_connected,
        vouches = view.vouches_processed,
        join_command = html_escape(join_command),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("quartier <sud> & \"co\""), "quartier &lt;sud&gt; &amp; &quot;co&quot;");
        assert_eq!(html_escape("rien"), "rien");
    }
}
