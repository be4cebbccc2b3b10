use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::handlers::SessionFlow;
use crate::helpers::send_reply;
use crate::session::Session;
use log::{info, warn};
use std::net::{IpAddr, Ipv4Addr};
use tokio::net::tcp::OwnedWriteHalf;

/// Handles the PASV command.
///
/// Opens a fresh ephemeral listener on the server's own address and
/// advertises it to the client. Any previous passive pair is torn down first.
pub async fn handle_pasv_command(
    writer: &mut OwnedWriteHalf,
    session: &mut Session,
) -> Result<SessionFlow, CommandError> {
    let ip = match session.local_ip {
        IpAddr::V4(ip) => ip,
        IpAddr::V6(_) => {
            warn!("PASV refused: control connection is not IPv4");
            return Err(CommandError::PassiveAddress);
        }
    };

    let addr = session
        .data_channel
        .open_passive(IpAddr::V4(ip))
        .await
        .map_err(CommandError::PassiveBind)?;

    let reply = format_pasv_reply(ip, addr.port());
    send_reply(writer, reply.as_bytes()).await?;
    info!("Passive mode enabled on {}:{}", ip, addr.port());
    Ok(SessionFlow::Continue)
}

/// Encodes the advertised address as the 6-octet PASV tuple: four address
/// octets, then the port split big-endian into high and low byte.
pub fn format_pasv_reply(ip: Ipv4Addr, port: u16) -> String {
    let [h1, h2, h3, h4] = ip.octets();
    format!(
        "227 Entering Passive Mode ({},{},{},{},{},{}).\r\n",
        h1,
        h2,
        h3,
        h4,
        (port >> 8) & 0xff,
        port & 0xff
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_the_port_into_big_endian_octets() {
        let reply = format_pasv_reply(Ipv4Addr::new(127, 0, 0, 1), 4660);
        assert_eq!(reply, "227 Entering Passive Mode (127,0,0,1,18,52).\r\n");
    }

    #[test]
    fn low_ports_have_a_zero_high_octet() {
        let reply = format_pasv_reply(Ipv4Addr::new(10, 1, 2, 3), 255);
        assert_eq!(reply, "227 Entering Passive Mode (10,1,2,3,0,255).\r\n");
    }

    #[test]
    fn the_highest_port_fills_both_octets() {
        let reply = format_pasv_reply(Ipv4Addr::new(192, 168, 0, 9), 65535);
        assert_eq!(reply, "227 Entering Passive Mode (192,168,0,9,255,255).\r\n");
    }
}
