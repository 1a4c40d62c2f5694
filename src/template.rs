use {
    crate::sensors::AmbientSnapshot,
    anyhow::{Context, Result},
    std::path::Path,
    tokio::fs,
};

/// Replaces every `(:name:)` placeholder that has a value; others are kept
/// verbatim.
pub fn bind(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("(:") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let replacement = after.find(":)").and_then(|end| {
            let name = &after[..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (value, end))
        });

        match replacement {
            Some((value, end)) => {
                output.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                output.push_str("(:");
                rest = after;
            }
        }
    }
    output.push_str(rest);

    output
}

pub fn snapshot_values(snapshot: &AmbientSnapshot) -> [(&'static str, String); 3] {
    [
        ("temperature", snapshot.temperature_text()),
        ("light", snapshot.light.to_string()),
        ("airQuality", snapshot.air_quality.to_string()),
    ]
}

/// Reads the template from disk and fills in the snapshot.
pub async fn render_file(path: &Path, snapshot: &AmbientSnapshot) -> Result<String> {
    let template = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read template {}", path.display()))?;

    Ok(bind(&template, &snapshot_values(snapshot)))
}

#[cfg(test)]
mod tests {
    use {super::*, std::env};

    fn snapshot() -> AmbientSnapshot {
        AmbientSnapshot {
            temperature: 15.41,
            light: 300,
            air_quality: 150,
        }
    }

    #[test]
    fn test_bind() {
        let html = bind(
            "<p>(:temperature:) C</p><p>(:light:)</p><p>(:airQuality:)</p>",
            &snapshot_values(&snapshot()),
        );
        assert_eq!(html, "<p>15.41 C</p><p>300</p><p>150</p>");
    }

    #[test]
    fn test_bind_repeated_and_unknown() {
        let values = [("a", "1".to_string())];
        assert_eq!(bind("(:a:)(:a:)", &values), "11");
        assert_eq!(bind("(:b:) (:a:)", &values), "(:b:) 1");
        assert_eq!(bind("smile (: and (:a", &values), "smile (: and (:a");
        assert_eq!(bind("", &values), "");
    }

    #[tokio::test]
    async fn test_render_file() {
        let path = env::temp_dir().join(format!("ambient-monitor-{}.tpl", std::process::id()));
        std::fs::write(&path, "Temp (:temperature:)").unwrap();

        let html = render_file(&path, &snapshot()).await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(html.unwrap(), "Temp 15.41");
    }

    #[tokio::test]
    async fn test_missing_template() {
        let err = render_file(Path::new("/nonexistent/sensors.tpl"), &snapshot())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/sensors.tpl"));
    }
}
