use rand::Rng;
use spaceframe::Protocol;

pub fn random_payload(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut dat: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
    // keep clear of the AOS payload marker
    if dat.first() == Some(&0x00) {
        dat[0] = 0xff;
    }
    dat
}

/// Append the correct trailer checksum for `protocol` to `body`.
pub fn seal(protocol: Protocol, body: &[u8]) -> Vec<u8> {
    let mut dat = body.to_vec();
    protocol.layout().checksum.append(&mut dat);
    dat
}
