use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read as _, Write},
    path::Path,
};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

/// Writes `value` as pretty-printed JSON to `path`, or to stdout when no path
/// is given.
pub fn save_json<T: Serialize>(value: &T, path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = path {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        write_json(BufWriter::new(file), value)
            .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
        log::info!("Results saved to {}", path.display());
    } else {
        write_json(io::stdout().lock(), value).context("Failed to write JSON to stdout")?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()
}

pub fn read_json_file<T: DeserializeOwned>(file_kind: &str, path: &Path) -> anyhow::Result<T> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} JSON file: {}", path.display()))
}

/// Collects raw observation text from command-line values, an input file, or
/// stdin when neither is given.
pub fn read_observation_text(values: &[String], input: Option<&Path>) -> anyhow::Result<String> {
    let mut text = values.join(" ");
    if let Some(path) = input {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file: {}", path.display()))?;
        log::info!("Loaded data from {}", path.display());
        text.push(' ');
        text.push_str(&contents);
    } else if values.is_empty() {
        log::info!("Reading data from stdin...");
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read data from stdin")?;
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_ends_with_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &serde_json::json!({ "mean": 1.5 })).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&text).unwrap()["mean"],
            1.5
        );
    }

    #[test]
    fn test_read_observation_text_joins_values() {
        let values = ["1,2".to_owned(), "3".to_owned()];
        assert_eq!(read_observation_text(&values, None).unwrap(), "1,2 3");
    }
}
