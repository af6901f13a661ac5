use publicid::{PublicIdCodec, PublicIdConfig};

fn main() {
    // Default configuration: 62-symbol alphabet, no minimum length
    let codec = PublicIdCodec::<u64>::default();

    let id = codec.encode(&[1, 2, 3]);
    println!("encode [1, 2, 3] -> {id}");
    println!("decode {id} -> {:?}", codec.decode(&id));

    // Custom alphabet with padded output
    let config = PublicIdConfig::builder()
        .alphabet("abcABC123")
        .unwrap()
        .min_length(8)
        .unwrap()
        .build();
    let codec: PublicIdCodec<u32> = PublicIdCodec::new(&config);

    for numbers in [vec![42u32], vec![9999, 1, 1243]] {
        let id = codec.encode(&numbers);
        println!("encode {numbers:?} -> {id} (length {})", id.len());
        assert_eq!(codec.decode(&id), numbers);
    }

    // Strings that were never produced by this configuration decode to
    // nothing instead of failing
    println!("decode \"hello!\" -> {:?}", codec.decode("hello!"));
}
