//! Benchmarks for catalog record parsing.
//!
//! These benchmarks measure decoding a full meal record and deriving its
//! ingredient lines.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meal_explorer::mealdb::MealRecord;
use serde_json::{json, Value};

fn full_record() -> Value {
    let mut record = json!({
        "idMeal": "52772",
        "strMeal": "Teriyaki Chicken Casserole",
        "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
        "strArea": "Japanese",
        "strInstructions": "Preheat oven to 350 F.",
    });
    if let Value::Object(fields) = &mut record {
        for slot in 1..=20 {
            fields.insert(format!("strIngredient{}", slot), json!(format!("Ingredient {}", slot)));
            fields.insert(format!("strMeasure{}", slot), json!(format!("{} cups", slot)));
        }
    }
    record
}

fn bench_decode_record(c: &mut Criterion) {
    let body = full_record().to_string();

    c.bench_function("decode_meal_record", |b| {
        b.iter(|| serde_json::from_str::<MealRecord>(black_box(&body)))
    });
}

fn bench_ingredient_lines(c: &mut Criterion) {
    let record: MealRecord = serde_json::from_value(full_record()).unwrap();

    c.bench_function("meal_record_ingredient_lines", |b| {
        b.iter(|| black_box(&record).ingredient_lines())
    });
}

fn bench_into_meal(c: &mut Criterion) {
    let record: MealRecord = serde_json::from_value(full_record()).unwrap();

    c.bench_function("meal_record_into_meal", |b| {
        b.iter(|| black_box(record.clone()).into_meal())
    });
}

criterion_group!(
    benches,
    bench_decode_record,
    bench_ingredient_lines,
    bench_into_meal
);
criterion_main!(benches);
