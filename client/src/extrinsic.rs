//! Signed extrinsic construction (format version 4)

use codec::{Compact, Encode, Output};
use sp_core::{hashing::blake2_256, H256};
use sp_runtime::{generic::Era, MultiAddress, MultiSignature};

use crate::call::RuntimeCall;
use crate::keyring::KeyringPair;

/// Signed bit plus extrinsic format version 4
const SIGNED_EXTRINSIC_V4: u8 = 0b1000_0000 | 4;

/// Signing payloads above this size are hashed first
const MAX_UNHASHED_PAYLOAD: usize = 256;

/// Chain parameters every signature commits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainContext {
    pub genesis_hash: H256,
    pub spec_version: u32,
    pub transaction_version: u32,
    /// Runtime includes `CheckMetadataHash` in its signed extensions
    pub metadata_hash_check: bool,
}

/// Extension data carried inside the extrinsic, in `SignedExtra` tuple order.
///
/// Only `CheckEra`, `CheckNonce`, `ChargeTransactionPayment` and the optional
/// `CheckMetadataHash` contribute bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedExtra {
    pub era: Era,
    pub nonce: u64,
    pub tip: u128,
    pub metadata_hash_check: bool,
}

impl Encode for SignedExtra {
    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        self.era.encode_to(dest);
        Compact(self.nonce).encode_to(dest);
        Compact(self.tip).encode_to(dest);
        if self.metadata_hash_check {
            // mode: disabled
            dest.push_byte(0);
        }
    }
}

/// Data the signature covers without it being part of the extrinsic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalSigned {
    pub spec_version: u32,
    pub transaction_version: u32,
    pub genesis_hash: H256,
    pub era_block_hash: H256,
    pub metadata_hash_check: bool,
}

impl Encode for AdditionalSigned {
    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        self.spec_version.encode_to(dest);
        self.transaction_version.encode_to(dest);
        self.genesis_hash.encode_to(dest);
        self.era_block_hash.encode_to(dest);
        if self.metadata_hash_check {
            None::<H256>.encode_to(dest);
        }
    }
}

/// A call with its signing inputs, ready to be signed
#[derive(Debug, Clone)]
pub struct UnsignedTransaction {
    pub call: RuntimeCall,
    pub extra: SignedExtra,
    pub additional: AdditionalSigned,
}

impl UnsignedTransaction {
    /// Immortal transaction for `call` at `nonce`
    pub fn new(call: RuntimeCall, nonce: u64, tip: u128, ctx: &ChainContext) -> Self {
        Self {
            call,
            extra: SignedExtra {
                era: Era::Immortal,
                nonce,
                tip,
                metadata_hash_check: ctx.metadata_hash_check,
            },
            additional: AdditionalSigned {
                spec_version: ctx.spec_version,
                transaction_version: ctx.transaction_version,
                genesis_hash: ctx.genesis_hash,
                // immortal eras are checked against the genesis block
                era_block_hash: ctx.genesis_hash,
                metadata_hash_check: ctx.metadata_hash_check,
            },
        }
    }

    /// Bytes handed to the signer: `call ++ extra ++ additional`, hashed when long
    pub fn signing_payload(&self) -> Vec<u8> {
        let payload = (&self.call, &self.extra, &self.additional).encode();
        if payload.len() > MAX_UNHASHED_PAYLOAD {
            blake2_256(&payload).to_vec()
        } else {
            payload
        }
    }

    pub fn sign(self, signer: &KeyringPair) -> SignedTransaction {
        let signature = signer.sign(&self.signing_payload());
        SignedTransaction {
            address: MultiAddress::Id(signer.account_id()),
            signature,
            extra: self.extra,
            call: self.call,
        }
    }
}

/// A signed extrinsic as accepted by `author_submitExtrinsic`
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    pub address: MultiAddress<sp_core::crypto::AccountId32, ()>,
    pub signature: MultiSignature,
    pub extra: SignedExtra,
    pub call: RuntimeCall,
}

impl SignedTransaction {
    /// Hash the node reports for this extrinsic
    pub fn hash(&self) -> H256 {
        H256(blake2_256(&self.encode()))
    }
}

impl Encode for SignedTransaction {
    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        let mut body = vec![SIGNED_EXTRINSIC_V4];
        self.address.encode_to(&mut body);
        self.signature.encode_to(&mut body);
        self.extra.encode_to(&mut body);
        self.call.encode_to(&mut body);

        Compact(body.len() as u32).encode_to(dest);
        dest.write(&body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call::{KittiesCall, PalletIndices};
    use crate::keyring::{verify, KeyScheme, Keyring};
    use codec::Decode;

    fn context(metadata_hash_check: bool) -> ChainContext {
        ChainContext {
            genesis_hash: H256::repeat_byte(0xab),
            spec_version: 100,
            transaction_version: 1,
            metadata_hash_check,
        }
    }

    fn create_kitty(dna: Vec<u8>) -> RuntimeCall {
        RuntimeCall::kitties(&PalletIndices::default(), KittiesCall::CreateKitty { dna, price: 10 })
    }

    #[test]
    fn extra_encoding() {
        let extra =
            SignedExtra { era: Era::Immortal, nonce: 1, tip: 0, metadata_hash_check: false };
        assert_eq!(extra.encode(), vec![0, 4, 0]);

        let extra = SignedExtra { metadata_hash_check: true, ..extra };
        assert_eq!(extra.encode(), vec![0, 4, 0, 0]);
    }

    #[test]
    fn additional_encoding() {
        let tx = UnsignedTransaction::new(create_kitty(vec![1]), 0, 0, &context(true));
        let encoded = tx.additional.encode();

        assert_eq!(encoded.len(), 4 + 4 + 32 + 32 + 1);
        assert_eq!(&encoded[..4], &100u32.to_le_bytes());
        assert_eq!(&encoded[8..40], &[0xab; 32]);
        assert_eq!(&encoded[40..72], &[0xab; 32]);
        assert_eq!(encoded[72], 0);
    }

    #[test]
    fn signature_covers_payload() {
        let keyring = Keyring::dev_accounts(KeyScheme::Sr25519).unwrap();
        let alice = keyring.get("alice").unwrap();

        let unsigned =
            UnsignedTransaction::new(create_kitty(b"abcd".to_vec()), 3, 0, &context(false));
        let payload = unsigned.signing_payload();
        let signed = unsigned.sign(alice);

        assert!(verify(&signed.signature, &payload, &alice.account_id()));
        assert_eq!(signed.address, MultiAddress::Id(alice.account_id()));
    }

    #[test]
    fn long_payloads_are_hashed() {
        let unsigned =
            UnsignedTransaction::new(create_kitty(vec![7u8; 300]), 0, 0, &context(false));
        assert_eq!(unsigned.signing_payload().len(), 32);

        let unsigned = UnsignedTransaction::new(create_kitty(vec![7u8; 4]), 0, 0, &context(false));
        assert!(unsigned.signing_payload().len() < 256);
    }

    #[test]
    fn extrinsic_layout() {
        let keyring = Keyring::dev_accounts(KeyScheme::Sr25519).unwrap();
        let bob = keyring.get("bob").unwrap();

        let call = create_kitty(b"xy".to_vec());
        let signed = UnsignedTransaction::new(call.clone(), 5, 0, &context(false)).sign(bob);
        let encoded = signed.encode();

        let mut input = &encoded[..];
        let len = Compact::<u32>::decode(&mut input).unwrap().0 as usize;
        assert_eq!(len, input.len());

        assert_eq!(input[0], SIGNED_EXTRINSIC_V4);
        // MultiAddress::Id
        assert_eq!(input[1], 0);
        assert_eq!(&input[2..34], AsRef::<[u8]>::as_ref(&bob.account_id()));
        // MultiSignature::Sr25519
        assert_eq!(input[34], 1);
        // era, nonce, tip
        assert_eq!(&input[99..102], &[0, 20, 0]);
        assert_eq!(&input[102..], call.encode().as_slice());

        assert_eq!(signed.hash(), H256(blake2_256(&encoded)));
    }
}
