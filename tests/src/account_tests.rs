use crate::common::{e2e_enabled, ether, get_balances, setup, ClientType, TestContext};
use ethers::types::{Address, Bytes, U256};
use eyre::{ensure, eyre};
use zkaa_contracts::send_transaction;
use zkaa_primitives::{Eip712TransactionRequest, Salt};

fn account2_address(ctx: &TestContext<ClientType>) -> eyre::Result<Address> {
    ctx.account2.as_ref().map(|account| account.address).ok_or_else(|| eyre!("no account 2"))
}

async fn deploys_account_with_owner(ctx: &mut TestContext<ClientType>) -> eyre::Result<()> {
    let balance = ctx.client.balance(ctx.account1.address).await?;
    ensure!(balance.is_zero(), "account 1 balance is {balance}");

    let owner = ctx.account1.contract().owner().call().await?;
    ensure!(owner == ctx.owner.address(), "account 1 owner is {owner:?}");

    Ok(())
}

async fn funds_account_from_deployer(ctx: &mut TestContext<ClientType>) -> eyre::Result<()> {
    let amount = ether("0.1")?;
    let before = get_balances(&ctx.client, &ctx.deployer, ctx.account1.address, &ctx.owner).await?;

    ctx.client.transfer(ctx.account1.address, amount).await?;

    let after = get_balances(&ctx.client, &ctx.deployer, ctx.account1.address, &ctx.owner).await?;
    ensure!(
        before.deployer_wallet_balance >= after.deployer_wallet_balance + amount,
        "deployer balance {} -> {}",
        before.deployer_wallet_balance,
        after.deployer_wallet_balance
    );
    // 100_000_000_000_000_000 or 0.1 eth
    ensure!(after.contract_account_balance == U256::from(0x016345785d8a0000u64));
    ensure!(after.client_wallet_balance == before.client_wallet_balance);

    Ok(())
}

async fn fails_to_deploy_account_with_same_salt(
    ctx: &mut TestContext<ClientType>,
) -> eyre::Result<()> {
    let res = ctx.factory.deploy_account(Salt::from_label("1"), ctx.owner.address()).await;
    ensure!(res.is_err(), "account deployed twice with the same salt");

    Ok(())
}

async fn deploys_second_account(ctx: &mut TestContext<ClientType>) -> eyre::Result<()> {
    let salt = Salt::from_label("2");
    let expected = ctx.factory.calc_contract_account_address(salt, ctx.owner.address()).await?;
    let account2 = ctx.factory.deploy_account_contract(ctx.owner.address(), "2").await?;

    ensure!(account2.address == expected, "account 2 deployed at {:?}", account2.address);
    ensure!(ctx.client.balance(account2.address).await?.is_zero());

    ctx.account2 = Some(account2);
    Ok(())
}

async fn fails_to_transfer_more_than_balance(
    ctx: &mut TestContext<ClientType>,
) -> eyre::Result<()> {
    let tx = Eip712TransactionRequest::new()
        .to(account2_address(ctx)?)
        .value(ether("0.1")?)
        .data(Bytes::default());

    let res = send_transaction(&ctx.client, ctx.account1.address, &ctx.owner, tx).await;
    ensure!(res.is_err(), "transfer above the account balance succeeded");

    Ok(())
}

async fn transfers_between_accounts(ctx: &mut TestContext<ClientType>) -> eyre::Result<()> {
    let amount = ether("0.05")?;
    let account2 = account2_address(ctx)?;
    let before1 = ctx.client.balance(ctx.account1.address).await?;
    let before2 = ctx.client.balance(account2).await?;

    let tx = Eip712TransactionRequest::new().to(account2).value(amount).data(Bytes::default());
    send_transaction(&ctx.client, ctx.account1.address, &ctx.owner, tx).await?;

    let after1 = ctx.client.balance(ctx.account1.address).await?;
    let after2 = ctx.client.balance(account2).await?;
    ensure!(after2 == before2 + amount, "account 2 balance {before2} -> {after2}");
    // the fee is paid by account 1
    ensure!(
        before1 >= after1 + amount && before1 - after1 - amount <= ether("0.01")?,
        "account 1 balance {before1} -> {after1}"
    );

    Ok(())
}

async fn ends_with_expected_balances(ctx: &mut TestContext<ClientType>) -> eyre::Result<()> {
    let some_ethers = ether("0.05")?;
    let delta = ether("0.01")?;

    let balance1 = ctx.client.balance(ctx.account1.address).await?;
    let diff = if balance1 > some_ethers { balance1 - some_ethers } else { some_ethers - balance1 };
    ensure!(diff <= delta, "account 1 balance is {balance1}");

    let balance2 = ctx.client.balance(account2_address(ctx)?).await?;
    ensure!(balance2 == some_ethers, "account 2 balance is {balance2}");

    Ok(())
}

#[tokio::test]
async fn default_account_flow() -> eyre::Result<()> {
    if !e2e_enabled() {
        return Ok(());
    }

    let mut ctx = setup().await?;

    deploys_account_with_owner(&mut ctx).await?;
    funds_account_from_deployer(&mut ctx).await?;
    fails_to_deploy_account_with_same_salt(&mut ctx).await?;
    deploys_second_account(&mut ctx).await?;
    fails_to_transfer_more_than_balance(&mut ctx).await?;
    transfers_between_accounts(&mut ctx).await?;
    ends_with_expected_balances(&mut ctx).await?;

    Ok(())
}
