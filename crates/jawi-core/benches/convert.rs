use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jawi_core::cache::ConversionCache;
use jawi_core::converter::Converter;
use jawi_core::dict::{DictEntry, Dictionary};

fn bench_dict() -> Dictionary {
    let roots = [
        ("makan", "ماکن"),
        ("nasi", "نسي"),
        ("saya", "ساي"),
        ("suka", "سوک"),
        ("luar", "لوار"),
        ("main", "ماٴين"),
        ("ke", "ک"),
        ("di", "د"),
        ("atas", "اتس"),
        ("rumah", "روميه"),
        ("kanak", "کانق"),
        ("kuala lumpur", "کوالا لومڤور"),
    ];
    let prefixes = [("di", "د"), ("mem", "مم"), ("menge", "مڠ"), ("per", "ڤر")];
    let suffixes = [("kan", "کن"), ("an", "ن"), ("nya", "ڽ")];
    let entries = |items: &[(&str, &str)]| -> Vec<(String, DictEntry)> {
        items
            .iter()
            .map(|&(k, v)| (k.to_string(), DictEntry::new(v)))
            .collect()
    };
    Dictionary::build(entries(&roots), entries(&prefixes), entries(&suffixes))
}

static INPUTS: &[(&str, &str)] = &[
    ("word", "mengeluarkan"),
    ("sentence", "Saya suka makan nasi di luar rumah, 3.5kg sehari."),
    (
        "paragraph",
        "Kanak-kanak bermain di atas rumah. Mereka dikeluarkan ke Kuala Lumpur \
         pada 12 Mac 2024, dan mempermainkannya sebanyak 40% daripada masa.\n\
         Saya suka makan nasi di luar; xyzzy syukur nyanyian khabar ghaib?",
    ),
];

fn bench_convert(c: &mut Criterion) {
    let dict = bench_dict();
    let conv = Converter::with_defaults(&dict);
    let mut group = c.benchmark_group("convert/uncached");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| conv.convert(text));
        });
    }
    group.finish();
}

fn bench_cached(c: &mut Criterion) {
    let dict = bench_dict();
    let conv = Converter::with_defaults(&dict);
    let mut cache = ConversionCache::new(64);
    let mut group = c.benchmark_group("convert/cached");
    for &(label, text) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, text.len()), &text, |b, &text| {
            b.iter(|| conv.convert_cached(&mut cache, text));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_convert, bench_cached);
criterion_main!(benches);
