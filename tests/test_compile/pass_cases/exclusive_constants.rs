use hostorder::{Endian, BIG_ENDIAN, HOST_ENDIAN, LITTLE_ENDIAN};

const _: () = assert!(LITTLE_ENDIAN != BIG_ENDIAN);
const _: () = assert!(LITTLE_ENDIAN == HOST_ENDIAN.is_le());

fn main() {
    let name = if LITTLE_ENDIAN {
        "little"
    } else if BIG_ENDIAN {
        "big"
    } else {
        unreachable!()
    };
    assert_eq!(name, HOST_ENDIAN.as_str());
    assert_eq!(HOST_ENDIAN, name.parse::<Endian>().unwrap());
}
