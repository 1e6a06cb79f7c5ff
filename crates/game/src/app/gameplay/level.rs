/// A level file that fails schema validation produces an error and no
/// partially built world.
#[derive(Debug, Error)]
enum MalformedLevelError {
    #[error("parse level json at {path}: {source}")]
    Field {
        path: String,
        source: serde_json::Error,
    },
    #[error("parse level json: {source}")]
    Document { source: serde_json::Error },
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Placement {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Deserialize)]
struct PlatformSpec {
    x: f32,
    y: f32,
    image: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct DecorationSpec {
    x: f32,
    y: f32,
    frame: u32,
}

/// Every top-level field is required: a level without, say, its timer
/// prop is a malformed document, not a level with fewer features.
#[derive(Debug, Deserialize)]
struct LevelDescription {
    hero: Placement,
    platforms: Vec<PlatformSpec>,
    spiders: Vec<Placement>,
    ladders: Vec<Placement>,
    coins: Vec<Placement>,
    decoration: Vec<DecorationSpec>,
    stage: Placement,
    #[serde(alias = "key")]
    water: Placement,
    table: Placement,
    timer: Placement,
    #[serde(alias = "generator")]
    fusebox: Placement,
    spotlights: Placement,
}

/// Level files allow `//` line comments; everything from the first `//`
/// to the end of the line is dropped, even inside string literals.
fn strip_line_comments(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    for line in raw.lines() {
        match line.find("//") {
            Some(index) => stripped.push_str(&line[..index]),
            None => stripped.push_str(line),
        }
        stripped.push('\n');
    }
    stripped
}

fn parse_level(raw: &str) -> Result<LevelDescription, MalformedLevelError> {
    let stripped = strip_line_comments(raw);
    let mut deserializer = serde_json::Deserializer::from_str(&stripped);
    match serde_path_to_error::deserialize::<_, LevelDescription>(&mut deserializer) {
        Ok(level) => Ok(level),
        Err(error) => {
            let path = error.path().to_string();
            let source = error.into_inner();
            if path.is_empty() || path == "." {
                Err(MalformedLevelError::Document { source })
            } else {
                Err(MalformedLevelError::Field { path, source })
            }
        }
    }
}
