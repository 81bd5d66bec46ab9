fn main() {
    sms_simulator::app::startup::startup();
}
