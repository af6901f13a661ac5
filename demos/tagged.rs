use publicid::{PublicIdConfig, PublicIdGenerator};

/// Per-entity tag for the demo's "place" records
const PLACE_TAG: u32 = 34903;

fn main() {
    let config = PublicIdConfig::builder()
        .alphabet("abcABC123")
        .unwrap()
        .min_length(8)
        .unwrap()
        .build();
    let generator = PublicIdGenerator::new(&config);

    // A web service exposes this id in response bodies and Location
    // headers instead of the raw row id
    for row_id in [17u32, 812, 4096] {
        let public_id = generator.encode_tagged(PLACE_TAG, row_id);
        println!("row {row_id} -> public id {public_id}");

        // On the read path the service recovers the storage key
        let recovered = generator.row_id_of(&public_id);
        assert_eq!(recovered, row_id);
        println!("  public id {public_id} -> row {recovered}");
    }

    // Malformed ids come back as row 0, which no row ever uses
    println!(
        "row_id_of(\"garbage\") -> {}",
        generator.row_id_of("garbage")
    );
}
