/// Off-chain backend that issues registration and participation authorizations
use k256::ecdsa::SigningKey;
use sale::signature;
use soroban_sdk::{Address, Bytes, BytesN, Env};

pub struct Backend {
    key: SigningKey,
}

impl Backend {
    /// Deterministic key derived from `seed`
    pub fn new(seed: u8) -> Self {
        let key = SigningKey::from_slice(&[seed; 32]).expect("valid secp256k1 scalar");
        Self { key }
    }

    /// 20-byte identity the contracts recover for this key
    pub fn signer_id(&self, env: &Env) -> BytesN<20> {
        let point = self.key.verifying_key().to_encoded_point(false);
        let mut public_key = [0u8; 65];
        public_key.copy_from_slice(point.as_bytes());
        signature::signer_from_public_key(env, &BytesN::from_array(env, &public_key))
    }

    pub fn sign_registration(&self, env: &Env, user: &Address, round_id: u32, sale: &Address) -> Bytes {
        let message = signature::registration_message(env, user, round_id, sale);
        self.sign(env, &message)
    }

    pub fn sign_participation(
        &self,
        env: &Env,
        user: &Address,
        amount: i128,
        amount_to_burn: i128,
        round_id: u32,
        sale: &Address,
    ) -> Bytes {
        let message =
            signature::participation_message(env, user, amount, amount_to_burn, round_id, sale);
        self.sign(env, &message)
    }

    /// Personal-message signature over `message`
    pub fn sign(&self, env: &Env, message: &Bytes) -> Bytes {
        let digest: BytesN<32> = env
            .crypto()
            .keccak256(&signature::prefixed_message(env, message))
            .into();
        self.sign_digest(env, &digest)
    }

    /// Signature over the bare keccak hash of `message`, without the prefix
    pub fn sign_unprefixed(&self, env: &Env, message: &Bytes) -> Bytes {
        let digest: BytesN<32> = env.crypto().keccak256(message).into();
        self.sign_digest(env, &digest)
    }

    fn sign_digest(&self, env: &Env, digest: &BytesN<32>) -> Bytes {
        let (sig, recovery_id) = self
            .key
            .sign_prehash_recoverable(&digest.to_array())
            .expect("signing succeeds");
        let mut raw = [0u8; 65];
        raw[..64].copy_from_slice(&sig.to_bytes());
        raw[64] = 27 + recovery_id.to_byte();
        Bytes::from_slice(env, &raw)
    }
}
