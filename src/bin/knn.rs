use std::env;
use std::process;

use knn::{generate_test_set, generate_training_set, KnnClassifier, Label};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <n_train> <d> <n_test> <k>", program);
    process::exit(1);
}

fn parse_arg(args: &[String], index: usize) -> usize {
    match args.get(index).and_then(|s| s.parse().ok()) {
        Some(value) => value,
        None => usage(&args[0]),
    }
}

fn print_point(features: &[f64], label: Label) {
    for v in features {
        print!("{} ", v);
    }
    println!("{}", label);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        usage(args.first().map(String::as_str).unwrap_or("knn"));
    }
    let n_train = parse_arg(&args, 1);
    let dim = parse_arg(&args, 2);
    let n_test = parse_arg(&args, 3);
    let k = parse_arg(&args, 4);

    let mut rng = rand::thread_rng();
    let train = generate_training_set(&mut rng, n_train, dim);
    let test = generate_test_set(&mut rng, n_test, dim);

    let classifier = match KnnClassifier::new(k, dim, train) {
        Ok(classifier) => classifier,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    let predicted = classifier.classify_all(test);

    println!("TRAIN (features + label):");
    for point in classifier.train() {
        print_point(&point.features, point.label);
    }

    println!();
    println!("TEST (features + predicted label):");
    for point in &predicted {
        print_point(&point.features, point.label);
    }
}
