//! Performance benchmarks for loading and saving the address book.
//!
//! These benchmarks measure:
//! - Conversion between the address book and its JSON document
//! - Full save and load through a file
//! - Different dataset sizes

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sellah::domain::{Address, Email, Id, Name, PhoneNumber, UnitPrice};
use sellah::storage::JsonSerializableAddressBook;
use sellah::{AddressBook, AddressBookStorage, Client, JsonAddressBookStorage, Product};
use std::hint::black_box;

/// Build an address book with `size` clients and `size` products.
fn create_address_book(size: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..size {
        let client = Client::new(
            Id::new(format!("c-{i}")).unwrap(),
            Name::new(format!("Client {i}")).unwrap(),
            PhoneNumber::new(format!("9{i:07}")).unwrap(),
            Email::new(format!("client{i}@example.com")).unwrap(),
            Address::new(format!("Block {i}, Example Street")).unwrap(),
        );
        book.add_client(client).unwrap();

        let product = Product::new(
            Id::new(format!("p-{i}")).unwrap(),
            Name::new(format!("Product {i}")).unwrap(),
            UnitPrice::new(format!("{}.{:02}", i, i % 100)).unwrap(),
        );
        book.add_product(product).unwrap();
    }
    book
}

/// Benchmark rebuilding the address book from its document, including the
/// duplicate checks.
fn bench_to_model_type(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_model_type");

    for size in [10, 100, 1000] {
        let document = JsonSerializableAddressBook::from(&create_address_book(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &document, |b, document| {
            b.iter(|| black_box(document.to_model_type().unwrap()));
        });
    }

    group.finish();
}

/// Benchmark a full save followed by a load through a temporary file.
fn bench_save_and_load(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonAddressBookStorage::new(dir.path().join("book.json"));
    let mut group = c.benchmark_group("save_and_load");

    for size in [10, 100, 1000] {
        let book = create_address_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| {
                storage.save_address_book(book).unwrap();
                black_box(storage.read_address_book().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_to_model_type, bench_save_and_load);
criterion_main!(benches);
