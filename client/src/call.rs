//! SCALE encoding of runtime calls into the kitties and template pallets

use codec::{Encode, Output};
use sp_core::crypto::AccountId32;

/// Position of each pallet in the target runtime's `construct_runtime!`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalletIndices {
    pub kitties: u8,
    pub template: u8,
}

impl Default for PalletIndices {
    // node-template layout: System, Timestamp, Aura, Grandpa, Balances,
    // TransactionPayment, Sudo, TemplateModule, Kitties
    fn default() -> Self {
        Self { kitties: 8, template: 7 }
    }
}

/// Calls of `pallet-kitties`, indices match its `#[pallet::call_index]`
#[derive(Debug, Clone, PartialEq, Eq, Encode)]
pub enum KittiesCall {
    #[codec(index = 0)]
    CreateKitty { dna: Vec<u8>, price: u32 },
    #[codec(index = 1)]
    TransferKitty { to: AccountId32, dna: Vec<u8> },
    #[codec(index = 2)]
    SetPrice { dna: Vec<u8>, new_price: u32 },
}

/// Calls of `pallet-template`, in declaration order of the pallet
#[derive(Debug, Clone, PartialEq, Eq, Encode)]
pub enum TemplateCall {
    #[codec(index = 0)]
    DoSomething { something: u32 },
    #[codec(index = 1)]
    PutNumber { number: u32 },
    #[codec(index = 2)]
    DeleteNumber,
    #[codec(index = 3)]
    CauseError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PalletCall {
    Kitties(KittiesCall),
    Template(TemplateCall),
}

/// A call addressed to a pallet of the target runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeCall {
    pub pallet_index: u8,
    pub call: PalletCall,
}

impl RuntimeCall {
    pub fn kitties(indices: &PalletIndices, call: KittiesCall) -> Self {
        Self { pallet_index: indices.kitties, call: PalletCall::Kitties(call) }
    }

    pub fn template(indices: &PalletIndices, call: TemplateCall) -> Self {
        Self { pallet_index: indices.template, call: PalletCall::Template(call) }
    }

    /// `pallet::call` name, for logs
    pub fn name(&self) -> &'static str {
        match &self.call {
            PalletCall::Kitties(KittiesCall::CreateKitty { .. }) => "Kitties::create_kitty",
            PalletCall::Kitties(KittiesCall::TransferKitty { .. }) => "Kitties::transfer_kitty",
            PalletCall::Kitties(KittiesCall::SetPrice { .. }) => "Kitties::set_price",
            PalletCall::Template(TemplateCall::DoSomething { .. }) => {
                "TemplateModule::do_something"
            }
            PalletCall::Template(TemplateCall::CauseError) => "TemplateModule::cause_error",
            PalletCall::Template(TemplateCall::PutNumber { .. }) => "TemplateModule::put_number",
            PalletCall::Template(TemplateCall::DeleteNumber) => "TemplateModule::delete_number",
        }
    }
}

impl Encode for RuntimeCall {
    fn size_hint(&self) -> usize {
        1 + match &self.call {
            PalletCall::Kitties(call) => call.size_hint(),
            PalletCall::Template(call) => call.size_hint(),
        }
    }

    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        dest.push_byte(self.pallet_index);
        match &self.call {
            PalletCall::Kitties(call) => call.encode_to(dest),
            PalletCall::Template(call) => call.encode_to(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_kitty_layout() {
        let call = RuntimeCall::kitties(
            &PalletIndices::default(),
            KittiesCall::CreateKitty { dna: b"abc".to_vec(), price: 0x0102 },
        );

        // pallet, call, compact(3), dna, price (little endian u32)
        assert_eq!(call.encode(), vec![8, 0, 12, b'a', b'b', b'c', 0x02, 0x01, 0, 0]);
    }

    #[test]
    fn transfer_kitty_layout() {
        let to = AccountId32::new([5u8; 32]);
        let indices = PalletIndices { kitties: 20, template: 21 };
        let encoded = RuntimeCall::kitties(
            &indices,
            KittiesCall::TransferKitty { to, dna: vec![9] },
        )
        .encode();

        assert_eq!(&encoded[..2], &[20, 1]);
        assert_eq!(&encoded[2..34], &[5u8; 32]);
        assert_eq!(&encoded[34..], &[4, 9]);
    }

    #[test]
    fn template_calls_layout() {
        let indices = PalletIndices::default();
        assert_eq!(
            RuntimeCall::template(&indices, TemplateCall::DoSomething { something: 1 }).encode(),
            vec![7, 0, 1, 0, 0, 0]
        );
        assert_eq!(
            RuntimeCall::template(&indices, TemplateCall::PutNumber { number: 2 }).encode(),
            vec![7, 1, 2, 0, 0, 0]
        );
        assert_eq!(
            RuntimeCall::template(&indices, TemplateCall::DeleteNumber).encode(),
            vec![7, 2]
        );
        assert_eq!(RuntimeCall::template(&indices, TemplateCall::CauseError).encode(), vec![7, 3]);
    }
}
