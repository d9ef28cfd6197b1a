use fastPairdist::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    #[serde(default)]
    params: Params,
    expected: Vec<f64>,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x1: Vec<f64>,
    y1: Vec<f64>,
    x2: Vec<f64>,
    y2: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct Params {
    #[serde(default)]
    kernel: Option<String>,
    #[serde(default)]
    chunk_size: Option<usize>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    distances: Vec<f64>,
    max_abs_error: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let input_dir = Path::new("../fixtures");
    let output_dir = Path::new("../output/fastPairdist");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Run validation/numpy/reference.py first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    let mut worst: f64 = 0.0;
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            let error = process_file(&path, output_dir)?;
            println!("Processed {:?}: max abs error {:.3e}", path, error);
            worst = worst.max(error);
        }
    }

    println!("Worst max abs error: {:.3e}", worst);
    Ok(())
}

fn parse_kernel(name: Option<&str>) -> Result<DistanceKernel, Box<dyn Error>> {
    match name.map(str::to_lowercase).as_deref() {
        None | Some("direct") => Ok(Direct),
        Some("hypot") => Ok(Hypot),
        Some(other) => Err(format!("Unknown kernel: {}", other).into()),
    }
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<f64, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let processor = Distance::new().kernel(parse_kernel(data.params.kernel.as_deref())?);
    let processor = if let Some(chunk) = data.params.chunk_size {
        processor.chunk_size(chunk)
    } else {
        processor
    };

    let model = processor.build()?;
    let input = &data.input;
    let result = model.compute(&input.x1, &input.y1, &input.x2, &input.y2)?;

    if result.len() != data.expected.len() {
        return Err(format!(
            "{}: expected {} distances, computed {}",
            data.name,
            data.expected.len(),
            result.len()
        )
        .into());
    }

    let max_abs_error = result
        .distances
        .iter()
        .zip(&data.expected)
        .map(|(got, want)| (got - want).abs())
        .fold(0.0, f64::max);

    data.result = ResultData {
        distances: result.into_vec(),
        max_abs_error,
    };

    let file_name = input_path.file_name().ok_or("fixture path has no file name")?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(max_abs_error)
}
