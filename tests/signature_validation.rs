use launchpad_tests::assert_contract_error;
use launchpad_tests::utils::constants::*;
use launchpad_tests::utils::{Backend, Launchpad};
use sale::{signature, SaleError};
use soroban_sdk::{testutils::Address as _, Address, Bytes, Env};

#[test]
fn test_signature_does_not_replay_across_sales() {
    let env = Env::default();
    let lp = Launchpad::new(&env);
    let (first, _) = lp.ready_sale(&Address::generate(&env));
    let (second, _) = lp.ready_sale(&Address::generate(&env));
    let user = lp.user();

    let sig = lp
        .backend
        .sign_registration(&env, &user, 1, &first.address);
    assert!(first.check_registration_signature(&user, &1, &sig));
    assert!(!second.check_registration_signature(&user, &1, &sig));

    lp.set_time(REG_START);
    assert_contract_error!(
        second.try_register_for_sale(&user, &sig, &1, &DEPOSIT),
        SaleError::InvalidSignature
    );
    first.register_for_sale(&user, &sig, &1, &DEPOSIT);
}

#[test]
fn test_unprefixed_signature_is_not_authorized() {
    let env = Env::default();
    let lp = Launchpad::new(&env);
    let (sale, _) = lp.ready_sale(&Address::generate(&env));
    let user = Address::generate(&env);

    let message = signature::registration_message(&env, &user, 1, &sale.address);
    let raw = lp.backend.sign_unprefixed(&env, &message);
    assert!(!sale.check_registration_signature(&user, &1, &raw));
    assert!(sale.check_registration_signature(&user, &1, &lp.backend.sign(&env, &message)));
}

#[test]
fn test_owner_key_authorizes_its_own_sale_only() {
    let env = Env::default();
    let lp = Launchpad::new(&env);
    let owner = Address::generate(&env);
    let (sale, _) = lp.ready_sale(&owner);
    let (other, _) = lp.ready_sale(&Address::generate(&env));
    let owner_backend = Backend::new(7);
    sale.set_owner_signer(&owner, &owner_backend.signer_id(&env));

    let user = Address::generate(&env);
    let sig = owner_backend.sign_participation(&env, &user, ONE, 0, 1, &sale.address);
    assert!(sale.check_participation_signature(&user, &ONE, &0, &1, &sig));

    let sig = owner_backend.sign_participation(&env, &user, ONE, 0, 1, &other.address);
    assert!(!other.check_participation_signature(&user, &ONE, &0, &1, &sig));
}

#[test]
fn test_rotated_admin_key() {
    let env = Env::default();
    let lp = Launchpad::new(&env);
    let (sale, _) = lp.ready_sale(&Address::generate(&env));
    let user = Address::generate(&env);
    let old_sig = lp
        .backend
        .sign_registration(&env, &user, 2, &sale.address);

    let rotated = Backend::new(99);
    lp.admins.set_signer(&lp.admin, &rotated.signer_id(&env));

    assert!(!sale.check_registration_signature(&user, &2, &old_sig));
    let new_sig = rotated.sign_registration(&env, &user, 2, &sale.address);
    assert!(sale.check_registration_signature(&user, &2, &new_sig));
}

#[test]
fn test_malformed_signature_errors() {
    let env = Env::default();
    let lp = Launchpad::new(&env);
    let (sale, _) = lp.ready_sale(&Address::generate(&env));
    let user = Address::generate(&env);

    assert_contract_error!(
        sale.try_check_registration_signature(&user, &1, &Bytes::from_slice(&env, &[0u8; 66])),
        SaleError::InvalidSignatureLength
    );

    let mut raw = [0u8; 65];
    lp.backend
        .sign_registration(&env, &user, 1, &sale.address)
        .copy_into_slice(&mut raw);
    raw[64] = 1;
    assert_contract_error!(
        sale.try_check_registration_signature(&user, &1, &Bytes::from_slice(&env, &raw)),
        SaleError::InvalidSignatureFormat
    );
}
