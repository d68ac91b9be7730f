use hex_literal::hex;
use proptest::prelude::*;
use whirlpool::{digest::dev::fixed_reset_test, Digest, Snapshot, Whirlpool, WhirlpoolCore};

const EMPTY: [u8; 64] = hex!(
    "19fa61d75522a4669b44e39c1d2e1726c530232130d407f89afee0964997f7a7"
    "3e83be698b288febcf88e3e03c4f0757ea8964e59b63d93708b138cc42a66eb3"
);

const ABC: [u8; 64] = hex!(
    "4e2448a4c6f486bb16b6562c73b4020bf3043e3a731bce721ae1b303d97e6d4c"
    "7181eebdb6c57e277d0e34957114cbd6c797fc9d95d8b582d225292076d4eef5"
);

fn check(input: &[u8], expected: &[u8]) {
    if let Some(desc) = fixed_reset_test::<Whirlpool>(input, expected) {
        panic!(
            "\nFailed test: {}\ninput:\t{:?}\nexpected:\t{:?}",
            desc, input, expected,
        );
    }
}

#[test]
fn empty() {
    assert_eq!(Whirlpool::digest(b"")[..], EMPTY[..]);
    check(b"", &EMPTY);
}

#[test]
fn abc() {
    assert_eq!(Whirlpool::digest(b"abc")[..], ABC[..]);
    check(b"abc", &ABC);
}

#[test]
fn nessie_vectors() {
    let vectors: &[(&[u8], [u8; 64])] = &[
        (
            &b"a"[..],
            hex!(
                "8aca2602792aec6f11a67206531fb7d7f0dff59413145e6973c45001d0087b42"
                "d11bc645413aeff63a42391a39145a591a92200d560195e53b478584fdae231a"
            ),
        ),
        (
            &b"message digest"[..],
            hex!(
                "378c84a4126e2dc6e56dcc7458377aac838d00032230f53ce1f5700c0ffb4d3b"
                "8421557659ef55c106b4b52ac5a4aaa692ed920052838f3362e86dbd37a8903e"
            ),
        ),
        (
            &b"abcdefghijklmnopqrstuvwxyz"[..],
            hex!(
                "f1d754662636ffe92c82ebb9212a484a8d38631ead4238f5442ee13b8054e41b"
                "08bf2a9251c30b6a0b8aae86177ab4a6f68f673e7207865d5d9819a3dba4eb3b"
            ),
        ),
        (
            &b"12345678901234567890123456789012345678901234567890123456789012345678901234567890"[..],
            hex!(
                "466ef18babb0154d25b9d38a6414f5c08784372bccb204d6549c4afadb601429"
                "4d5bd8df2a6c44e538cd047b2681a51a2c60481e88c5a20b2c2a80cf3a9a083b"
            ),
        ),
        (
            &b"The quick brown fox jumps over the lazy dog"[..],
            hex!(
                "b97de512e91e3828b40d2b0fdce9ceb3c4a71f9bea8d88e75c4fa854df36725f"
                "d2b52eb6544edcacd6f8beddfea403cb55ae31f03ad62a5ef54e42ee82c3fb35"
            ),
        ),
        (
            &b"The quick brown fox jumps over the lazy eog"[..],
            hex!(
                "c27ba124205f72e6847f3e19834f925cc666d0974167af915bb462420ed40cc5"
                "0900d85a1f923219d832357750492d5c143011a76988344c2635e69d06f2d38c"
            ),
        ),
    ];
    for (input, expected) in vectors {
        check(input, expected);
    }
}

// Lengths around the point where the padding needs a second block.
#[test]
fn padding_boundaries() {
    let vectors: &[(usize, [u8; 64])] = &[
        (
            31,
            hex!(
                "e2777d6c403c0dfc15eec7d73d359c93ccb20eb445d525d7f07453b9a84911e2"
                "d7c911ff265a21af776db7f84a486e72882dc1dcd8793ec30800113409d085ad"
            ),
        ),
        (
            32,
            hex!(
                "3556a798a7e2e42eba339c05069b95909d6e1bb2b7fdd0751b39e53ed5c43ca5"
                "d56fa4471c71d55c7ce097561a80c0fdf0d50b1199bd11331b3bfb9fd2791b9b"
            ),
        ),
        (
            33,
            hex!(
                "f50e5786e8a91218629381d7ed9c6de5aeff10757450caf76de3f20757a8dbb0"
                "e29f351625a3ac2816bd4f76463f75f7e28a9926c8d4d49615e3eefebc1a7cf2"
            ),
        ),
        (
            64,
            hex!(
                "51a8d1c06922909f8cf04bf73b7ad23823177135137ea1432e081754ca3718e4"
                "ce14e636133221ce2d508113420ac08188dfbe3f97c24cb7e7f7a161ebc93da4"
            ),
        ),
        (
            65,
            hex!(
                "0642e8fcbefd1e003df1fdc9b6ced5d2a11843fb5f84eb849baf9ba55bd01e09"
                "1ae317836b57b541ca8f53c4b151d526167a1d4d7c528c3885021bd311bac1dc"
            ),
        ),
    ];
    for (len, expected) in vectors {
        check(&vec![b'A'; *len], expected);
    }
}

#[test]
fn million_a() {
    let mut hasher = Whirlpool::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk[..]);
    }
    let expected = hex!(
        "0c99005beb57eff50a7cf005560ddf5d29057fd86b20bfd62deca0f1ccea4af5"
        "1fc15490eddc47af32bb2b66c34ff9ad8c6008ad677f77126953b226e4ed8b01"
    );
    assert_eq!(hasher.finalize()[..], expected[..]);
}

#[test]
fn fixed_sizes() {
    use whirlpool::digest::core_api::BlockSizeUser;

    assert_eq!(<Whirlpool as Digest>::output_size(), 64);
    assert_eq!(Whirlpool::block_size(), 64);
    assert_eq!(whirlpool::OUTPUT_SIZE, 64);
    assert_eq!(whirlpool::BLOCK_SIZE, 64);
    assert_eq!(Whirlpool::digest(&[0u8; 1000][..]).len(), 64);
}

#[test]
fn length_counter_carries() {
    let data: Vec<u8> = (0..=255u8).collect();
    let mut hasher = Whirlpool::new();
    for _ in 0..256 {
        hasher.update(&data);
    }

    // 256 * 256 bytes = 2^19 bits
    let mut expected = [0u8; 32];
    expected[29] = 0x08;
    assert_eq!(hasher.bit_len(), expected);

    let expected = hex!(
        "152d05eab20414898e4de5a34c9ec08069e3051ef2987e8c19951b16623e3594"
        "d1aea04018f9615036ed3ef45f16d192695c55ce67106d56253387b80e110af7"
    );
    assert_eq!(hasher.finalize()[..], expected[..]);
}

#[test]
fn current_digest_allows_further_updates() {
    let mut hasher = Whirlpool::new();
    hasher.update(b"ab");
    assert_eq!(hasher.current_digest(), Whirlpool::digest(b"ab"));
    assert_eq!(hasher.current_digest(), Whirlpool::digest(b"ab"));

    hasher.update(b"c");
    assert_eq!(hasher.current_digest()[..], ABC[..]);
    assert_eq!(hasher.finalize()[..], ABC[..]);
}

#[test]
fn finalize_append_keeps_prefix() {
    let mut hasher = Whirlpool::new();
    hasher.update(b"abc");

    let mut out = b"prefix".to_vec();
    hasher.finalize_append(&mut out);
    assert_eq!(out.len(), 6 + 64);
    assert_eq!(&out[..6], b"prefix");
    assert_eq!(out[6..], ABC[..]);

    hasher.update(b"d");
    assert_eq!(hasher.finalize(), Whirlpool::digest(b"abcd"));
}

#[test]
fn reset_restores_fresh_state() {
    let mut hasher = Whirlpool::new();
    hasher.update(&[0x5a; 200][..]);
    Digest::reset(&mut hasher);
    assert_eq!(hasher.bit_len(), [0u8; 32]);
    hasher.update(b"abc");
    assert_eq!(hasher.finalize_reset()[..], ABC[..]);
    assert_eq!(hasher.finalize()[..], EMPTY[..]);
}

#[test]
fn io_write_adapter() {
    let mut hasher = Whirlpool::new();
    let n = std::io::copy(&mut &b"abc"[..], &mut hasher).unwrap();
    assert_eq!(n, 3);
    assert_eq!(hasher.finalize()[..], ABC[..]);
}

#[test]
fn dyn_digest() {
    use whirlpool::digest::DynDigest;

    let mut hasher: Box<dyn DynDigest> = Box::new(Whirlpool::new());
    hasher.update(b"abc");
    assert_eq!(hasher.output_size(), 64);
    assert_eq!(hasher.finalize_reset()[..], ABC[..]);
    assert_eq!(hasher.finalize()[..], EMPTY[..]);
}

#[test]
fn opaque_debug() {
    assert_eq!(format!("{:?}", WhirlpoolCore::default()), "WhirlpoolCore { ... }");
    assert!(format!("{:?}", Whirlpool::new()).starts_with("Whirlpool {"));
}

#[test]
fn clone_then_finalize_matches_one_shot() {
    for &n in &[0usize, 3, 31, 32, 33, 63, 64, 65, 200, 1000] {
        let data: Vec<u8> = (0..n).map(|i| (i * 7) as u8).collect();
        let mut hasher = Whirlpool::new();
        hasher.update(&data);
        assert_eq!(hasher.clone().finalize(), Whirlpool::digest(&data), "len {}", n);
        assert_eq!(hasher.current_digest(), Whirlpool::digest(&data), "len {}", n);
        hasher.update(b"tail");
    }
}

proptest! {
    #[test]
    fn chunked_updates_match_one_shot(
        data in prop::collection::vec(any::<u8>(), 0..600),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(data.len() + 1)).collect();
        points.sort_unstable();

        let mut hasher = Whirlpool::new();
        let mut start = 0;
        for p in points {
            hasher.update(&data[start..p]);
            start = p;
        }
        hasher.update(&data[start..]);
        prop_assert_eq!(hasher.finalize(), Whirlpool::digest(&data));
    }

    #[test]
    fn digest_read_does_not_disturb_absorption(
        a in prop::collection::vec(any::<u8>(), 0..300),
        b in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let mut hasher = Whirlpool::new();
        hasher.update(&a);
        prop_assert_eq!(hasher.current_digest(), Whirlpool::digest(&a));
        hasher.update(&b);

        let mut joined = a.clone();
        joined.extend_from_slice(&b);
        prop_assert_eq!(hasher.current_digest(), Whirlpool::digest(&joined));
    }

    #[test]
    fn reset_matches_fresh_hasher(
        junk in prop::collection::vec(any::<u8>(), 0..300),
        x in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let mut hasher = Whirlpool::new();
        hasher.update(&junk);
        Digest::reset(&mut hasher);
        hasher.update(&x);
        prop_assert_eq!(hasher.finalize(), Whirlpool::digest(&x));
    }
}
